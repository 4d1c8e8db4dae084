//! Scripted [`ModelGateway`] for integration tests: fixed reply or failure,
//! optional delay, and a record of every prompt and history length.

use async_trait::async_trait;
use gemini_client::{ChatTurn, GatewayError, ModelGateway};
use std::sync::Mutex;
use std::time::Duration;

/// One recorded gateway call.
#[derive(Debug, Clone)]
pub struct GatewayCall {
    pub history_len: usize,
    pub prompt: String,
}

enum Script {
    Reply(String),
    Fail(GatewayError),
}

/// Mock gateway that replays a fixed script and records each call.
pub struct MockGateway {
    script: Script,
    delay: Option<Duration>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    /// Gateway that always succeeds with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(reply.into()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Gateway that always fails with `error`.
    pub fn failing(error: GatewayError) -> Self {
        Self {
            script: Script::Fail(error),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleeps for `delay` inside each call, to widen race windows in tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn generate(&self, history: &[ChatTurn], prompt: &str) -> Result<String, GatewayError> {
        self.calls.lock().unwrap().push(GatewayCall {
            history_len: history.len(),
            prompt: prompt.to_string(),
        });
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(error) => Err(error.clone()),
        }
    }
}
