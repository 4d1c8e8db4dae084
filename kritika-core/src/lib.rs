//! # kritika-core
//!
//! Core types and traits for the Kritika bot: [`Bot`], message and user types,
//! the error taxonomy, and tracing initialization. Transport-agnostic; the
//! teloxide implementation of [`Bot`] lives in the application crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, InboundMessage, ToCoreMessage, ToCoreUser, User};
