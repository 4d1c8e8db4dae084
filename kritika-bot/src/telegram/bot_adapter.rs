//! Wraps teloxide::Bot and implements [`kritika_core::Bot`]. Production code
//! sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use kritika_core::{Bot as CoreBot, BotError, Chat, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::{prelude::*, types::ChatId, types::ParseMode};

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
/// Replies are sent with Markdown formatting.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}
