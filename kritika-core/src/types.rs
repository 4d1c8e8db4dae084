//! Core types: user, chat, and inbound message.

use serde::{Deserialize, Serialize};

/// User identity (id, username, first name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

/// Chat identity: one conversation thread with one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// A single inbound update. `text` is `None` for non-text content
/// (stickers, photos, voice notes); such updates are ignored by the dispatcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub chat: Chat,
    pub user: User,
    pub text: Option<String>,
}

impl InboundMessage {
    /// Display name used for prompt templating; `None` when the transport
    /// supplied no first name (the dispatcher falls back to a sentinel).
    pub fn display_name(&self) -> Option<&str> {
        self.user.first_name.as_deref()
    }
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`InboundMessage`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> InboundMessage;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_present() {
        let msg = InboundMessage {
            chat: Chat { id: 42 },
            user: User {
                id: 1,
                username: Some("asha".to_string()),
                first_name: Some("Asha".to_string()),
            },
            text: Some("hello".to_string()),
        };
        assert_eq!(msg.display_name(), Some("Asha"));
    }

    #[test]
    fn test_display_name_absent() {
        let msg = InboundMessage {
            chat: Chat { id: 42 },
            user: User {
                id: 1,
                username: None,
                first_name: None,
            },
            text: None,
        };
        assert_eq!(msg.display_name(), None);
    }
}
