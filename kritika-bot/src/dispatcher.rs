//! Message dispatcher: routes inbound updates to the start and text flows,
//! resolves session state, calls the model gateway, and sends the reply.

use std::sync::Arc;

use gemini_client::{GatewayError, ModelGateway};
use kritika_core::{Bot, Chat, InboundMessage, Result};
use tracing::{error, info, instrument, warn};

use crate::session::SessionStore;

// --- User-facing messages (sent to Telegram) ---

/// Fallback display name when Telegram supplies no first name.
const DEFAULT_SENDER_NAME: &str = "दोस्त";

/// Sent when the gateway returned no text at all.
pub const MSG_EMPTY_REPLY: &str = "माफ़ करें, कुछ गड़बड़ हो गई। मैं अभी जवाब नहीं दे पा रही हूँ।";

/// Sent when the gateway call failed (timeout, safety block, API error).
pub const MSG_REQUEST_FAILED: &str =
    "क्षमा करें, मुझे जवाब देने में परेशानी हो रही है। कृपया बाद में कोशिश करें।";

/// Welcome message for /start; embeds the sender's display name.
fn welcome_message(name: &str) -> String {
    format!(
        "Hi {name}! 👋\n\
         Main Kritika hoon – aapki English Teacher. 💡\n\
         Main aapko 90 dino mein basic se advanced English sikhane wali hoon, step-by-step.\n\
         Har din aapko grammar aur translation ka ek chhota task milega.\n\
         Shuruaat karein? ✨"
    )
}

/// Templated prompt combining sender name and message text.
fn build_prompt(name: &str, text: &str) -> String {
    format!("उपयोगकर्ता का नाम: {name}\nउपयोगकर्ता का संदेश: {text}")
}

/// First token of a command message without any @botname suffix; None for non-commands.
fn command_name(text: &str) -> Option<&str> {
    let first = text.split_whitespace().next()?;
    if !first.starts_with('/') {
        return None;
    }
    Some(first.split('@').next().unwrap_or(first))
}

/// Truncates text for log fields so long messages don't flood the log.
fn truncate_for_log(text: &str) -> String {
    const MAX_CHARS: usize = 64;
    if text.chars().count() <= MAX_CHARS {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX_CHARS).collect();
        format!("{head}…")
    }
}

/// Routes inbound updates: `/start` resets the session and welcomes the user,
/// plain text goes through the gateway, everything else is a silent no-op.
/// Transport-agnostic; both polling and webhook funnel into [`Dispatcher::dispatch`].
///
/// **External interactions:** Telegram (via [`Bot`]) for outbound replies,
/// the model provider (via [`ModelGateway`]) for generation.
pub struct Dispatcher {
    bot: Arc<dyn Bot>,
    gateway: Arc<dyn ModelGateway>,
    sessions: Arc<SessionStore>,
}

impl Dispatcher {
    pub fn new(
        bot: Arc<dyn Bot>,
        gateway: Arc<dyn ModelGateway>,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            bot,
            gateway,
            sessions,
        }
    }

    /// Entry point for every validated inbound event, regardless of transport.
    #[instrument(skip(self, message))]
    pub async fn dispatch(&self, message: &InboundMessage) -> Result<()> {
        let chat = &message.chat;
        let name = message.display_name().unwrap_or(DEFAULT_SENDER_NAME);

        let text = match message.text.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                info!(chat_id = chat.id, "Non-text or empty message, ignoring");
                return Ok(());
            }
        };

        match command_name(text) {
            Some("/start") => self.on_start(chat, name).await,
            Some(other) => {
                info!(chat_id = chat.id, command = %other, "Unsupported command, ignoring");
                Ok(())
            }
            None => self.on_text(chat, name, text).await,
        }
    }

    /// `/start`: resets the dialogue context and sends the welcome message.
    pub async fn on_start(&self, chat: &Chat, sender_name: &str) -> Result<()> {
        self.sessions.reset(chat.id).await;
        info!(chat_id = chat.id, "Sending welcome message");
        self.bot.send_message(chat, &welcome_message(sender_name)).await
    }

    /// Plain text: resolves the session, calls the gateway under the session
    /// lock, appends the turn on success, then sends the reply or an apology.
    pub async fn on_text(&self, chat: &Chat, sender_name: &str, text: &str) -> Result<()> {
        info!(
            chat_id = chat.id,
            text = %truncate_for_log(text),
            "Received message"
        );

        let session = self.sessions.get_or_create(chat.id).await;
        let prompt = build_prompt(sender_name, text);

        // Hold the session lock across the gateway call so two messages for the
        // same conversation cannot interleave their read-modify-write.
        let outcome = {
            let mut context = session.lock().await;
            info!(
                chat_id = chat.id,
                prompt = %truncate_for_log(&prompt),
                "Sending to Gemini"
            );
            match self.gateway.generate(context.turns(), &prompt).await {
                Ok(reply) => {
                    context.record_turn(prompt, reply.clone());
                    Ok(reply)
                }
                Err(e) => Err(e),
            }
        };

        match outcome {
            Ok(reply) => {
                info!(
                    chat_id = chat.id,
                    reply = %truncate_for_log(&reply),
                    "Sending reply"
                );
                self.bot.send_message(chat, &reply).await
            }
            Err(GatewayError::Empty) => {
                warn!(chat_id = chat.id, "Empty response from Gemini");
                self.bot.send_message(chat, MSG_EMPTY_REPLY).await
            }
            Err(e) => {
                error!(chat_id = chat.id, error = %e, "Gemini request failed");
                self.bot.send_message(chat, MSG_REQUEST_FAILED).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_plain() {
        assert_eq!(command_name("/start"), Some("/start"));
        assert_eq!(command_name("/help"), Some("/help"));
    }

    #[test]
    fn test_command_name_with_bot_suffix_and_payload() {
        assert_eq!(command_name("/start@KritikaBot"), Some("/start"));
        assert_eq!(command_name("/start deep-link-payload"), Some("/start"));
    }

    #[test]
    fn test_command_name_non_command() {
        assert_eq!(command_name("hello"), None);
        assert_eq!(command_name("  kaise ho /start"), None);
        assert_eq!(command_name(""), None);
    }

    #[test]
    fn test_build_prompt_embeds_name_and_text() {
        let prompt = build_prompt("Asha", "How are you?");
        assert!(prompt.contains("Asha"));
        assert!(prompt.contains("How are you?"));
        assert!(prompt.contains('\n'));
    }

    #[test]
    fn test_welcome_message_embeds_name() {
        assert!(welcome_message("Asha").contains("Asha"));
    }

    #[test]
    fn test_truncate_for_log_limits_length() {
        let long = "क".repeat(200);
        let truncated = truncate_for_log(&long);
        assert_eq!(truncated.chars().count(), 65);
        assert!(truncated.ends_with('…'));
        assert_eq!(truncate_for_log("short"), "short");
    }
}
