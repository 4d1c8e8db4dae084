use thiserror::Error;

/// Errors surfaced by bot components. Gateway failures carry their own type
/// (`gemini_client::GatewayError`) so callers cannot forget the fallback path.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;
