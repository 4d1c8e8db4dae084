//! kritika-bot entry point: load env config, init tracing, wire the gateway,
//! session store, and dispatcher, then start the selected transport.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gemini_client::GeminiClient;
use kritika_bot::config::Config;
use kritika_bot::dispatcher::Dispatcher;
use kritika_bot::persona::DEFAULT_SYSTEM_INSTRUCTION;
use kritika_bot::session::SessionStore;
use kritika_bot::telegram::{TelegramBotAdapter, Transport};
use kritika_bot::{load_config, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run(config).await
        }
    }
}

async fn run(config: Config) -> Result<()> {
    config.validate()?;
    kritika_core::init_tracing(config.log_file.as_deref())?;

    let system_instruction = match config.system_prompt.clone() {
        Some(s) => {
            let prefix: String = s.chars().take(50).collect();
            info!(len = s.len(), prefix = %prefix, "Using custom SYSTEM_PROMPT from env");
            s
        }
        None => {
            info!("Using built-in Kritika system instruction");
            DEFAULT_SYSTEM_INSTRUCTION.to_string()
        }
    };

    let gateway = Arc::new(
        GeminiClient::new(config.google_api_key.clone())
            .with_system_instruction(system_instruction),
    );

    let bot = match &config.telegram_api_url {
        Some(api_url) => {
            teloxide::Bot::new(config.bot_token.clone()).set_api_url(url::Url::parse(api_url)?)
        }
        None => teloxide::Bot::new(config.bot_token.clone()),
    };

    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let sessions = Arc::new(SessionStore::new());
    let dispatcher = Arc::new(Dispatcher::new(adapter, gateway, sessions));

    let transport = Transport::from_config(&config)?;
    transport.start(bot, dispatcher).await
}
