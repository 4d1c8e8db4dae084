//! Mock implementation of [`kritika_bot::Bot`] for integration tests.
//!
//! Records every `send_message` call so tests can assert on outbound replies
//! without hitting Telegram.

use async_trait::async_trait;
use kritika_bot::{Bot, Chat, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone)]
pub struct SendRecord {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that sends each outbound message as a `SendRecord` to a channel;
/// the receiver is held by the test.
pub struct MockBot {
    send_tx: mpsc::UnboundedSender<SendRecord>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for send records.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SendRecord>) {
        let (send_tx, send_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { send_tx }), send_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.send_tx.send(SendRecord {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}
