//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the teloxide-based implementation lives in
//! the application crate so this crate stays free of transport dependencies.

use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for sending text back to a conversation. Implementations map to
/// a transport (e.g. Telegram); tests substitute a recording mock.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}
