//! Adapters from Telegram (teloxide) types to kritika_core types.
//! Depends only on teloxide and core type definitions.

use kritika_core::{Chat, InboundMessage, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`InboundMessage`].
/// Non-text content maps to `text: None` so the dispatcher ignores it.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> InboundMessage {
        InboundMessage {
            chat: Chat {
                id: self.0.chat.id.0,
            },
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                }),
            text: self.0.text().map(|s| s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Asha".to_string(),
            last_name: Some("Sharma".to_string()),
            username: Some("asha".to_string()),
            language_code: Some("hi".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let wrapper = TelegramUserWrapper(&user);
        let core_user = wrapper.to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("asha".to_string()));
        assert_eq!(core_user.first_name, Some("Asha".to_string()));
    }
}
