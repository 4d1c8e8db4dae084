//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "kritika-bot")]
#[command(about = "Kritika Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load Config from environment. If `token` is provided it overrides TELEGRAM_BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<Config> {
    Config::from_env(token)
}
