//! # kritika-bot
//!
//! Telegram bot that relays chat messages to Gemini: per-conversation session
//! state, a transport-agnostic dispatcher, and polling or webhook transports.
//! Wires kritika-core and gemini-client; loads config from env and runs.

pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod persona;
pub mod session;
pub mod telegram;

// Re-export CLI
pub use cli::{load_config, Cli, Commands};

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use session::{DialogueContext, SessionHandle, SessionStore};
pub use telegram::{TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper, Transport};

// Re-export core types so integration tests and downstream users need one import
pub use kritika_core::{Bot, BotError, Chat, InboundMessage, Result, User};
