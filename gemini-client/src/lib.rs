//! # Gemini API client
//!
//! Thin wrapper around the generateContent REST endpoint. Defines the
//! [`ModelGateway`] trait and the [`GeminiClient`] implementation with fixed
//! generation parameters and safety thresholds. Provides token masking for
//! safe logging and a simple request/response API.

mod wire;

pub use wire::{safety_settings, ChatRole, ChatTurn, GenerationConfig, SafetySetting};

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

use wire::{Content, GenerateContentRequest, GenerateContentResponse};

/// Default model, matching the bot's production configuration.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Upper bound for one generateContent round trip; slower requests surface as
/// [`GatewayError::Timeout`] and take the same fallback path as other failures.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head_len = 7.min(len);
        let tail_len = 4.min(len.saturating_sub(head_len));
        let head = &token[..head_len];
        let tail = if tail_len > 0 {
            &token[len - tail_len..]
        } else {
            ""
        };
        format!("{}***{}", head, tail)
    }
}

/// Enumerated gateway failures. Callers must map every kind to a user-facing
/// fallback; raw provider errors never reach the end user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("request timed out")]
    Timeout,

    #[error("blocked by safety filter: {0}")]
    Blocked(String),

    #[error("empty response from model")]
    Empty,

    #[error("API error HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(String),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Gateway to the generative-model provider: submits the accumulated dialogue
/// context plus a new prompt and returns generated text or a signaled failure.
/// The gateway never mutates the context; the caller appends the turn on success.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, history: &[ChatTurn], prompt: &str) -> Result<String, GatewayError>;
}

/// Gemini generateContent client. Holds fixed generation parameters and safety
/// thresholds, and optionally a system instruction applied to every request.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    system_instruction: Option<String>,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. for proxies or tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            system_instruction: None,
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_system_instruction_opt(mut self, instruction: Option<String>) -> Self {
        self.system_instruction = instruction;
        self
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = config;
        self
    }

    fn build_request(&self, history: &[ChatTurn], prompt: &str) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::from(&ChatTurn::user(prompt)));
        GenerateContentRequest {
            contents,
            system_instruction: self.system_instruction.as_deref().map(Content::system),
            generation_config: self.generation_config.clone(),
            safety_settings: safety_settings(),
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate(&self, history: &[ChatTurn], prompt: &str) -> Result<String, GatewayError> {
        let request = self.build_request(history, prompt);
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        info!(
            model = %self.model,
            turn_count = request.contents.len(),
            api_key = %mask_token(&self.api_key),
            "Gemini generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Gemini API error");
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        extract_reply(response)
    }
}

/// Maps transport-level reqwest failures. Timeouts get their own kind so the
/// caller can tell a slow provider from a broken one.
fn request_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Http(e.to_string())
    }
}

/// Pulls the reply text out of a response, mapping safety blocks and empty
/// candidates to their failure kinds.
fn extract_reply(response: GenerateContentResponse) -> Result<String, GatewayError> {
    if let Some(usage) = &response.usage_metadata {
        info!(
            prompt_tokens = usage.prompt_token_count,
            completion_tokens = usage.candidates_token_count,
            total_tokens = usage.total_token_count,
            "Gemini generateContent usage"
        );
    }

    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            return Err(GatewayError::Blocked(reason.clone()));
        }
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GatewayError::Empty)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(GatewayError::Blocked("SAFETY".to_string()));
    }

    let text: String = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        Err(GatewayError::Empty)
    } else {
        Ok(text)
    }
}
