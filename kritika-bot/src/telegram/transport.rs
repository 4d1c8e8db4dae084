//! Transport run modes: long polling or webhook listener. Both funnel every
//! update through the same dispatcher entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use kritika_core::ToCoreMessage;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{error, info, instrument};
use url::Url;

use super::adapters::TelegramMessageWrapper;
use crate::config::Config;
use crate::dispatcher::Dispatcher;

/// Path the platform pushes updates to in webhook mode.
const WEBHOOK_PATH: &str = "/webhook";

/// The two mutually exclusive ways of receiving updates. Selected once at
/// startup from config; `start` consumes the transport and runs until shutdown.
pub enum Transport {
    /// Repeatedly pulls updates from Telegram. Local/development operation.
    Polling,
    /// Opens an HTTP listener and registers it with Telegram. Always-on
    /// production operation.
    Webhook {
        /// Full public URL of the webhook endpoint.
        url: Url,
        /// Listen port bound on 0.0.0.0.
        port: u16,
        /// Shared secret Telegram echoes in X-Telegram-Bot-Api-Secret-Token;
        /// the listener rejects callers that do not present it.
        secret_token: String,
    },
}

impl Transport {
    /// Selects the run mode: webhook when WEBHOOK_URL is configured, polling otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        match (&config.webhook_url, &config.webhook_secret) {
            (Some(base), Some(secret)) => {
                let url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), WEBHOOK_PATH))
                    .with_context(|| format!("WEBHOOK_URL is not a valid URL: {base}"))?;
                Ok(Self::Webhook {
                    url,
                    port: config.port,
                    secret_token: secret.clone(),
                })
            }
            (Some(_), None) => anyhow::bail!("WEBHOOK_URL is set but WEBHOOK_SECRET is missing"),
            (None, _) => Ok(Self::Polling),
        }
    }

    /// Runs the bot until the underlying listener stops. In webhook mode this
    /// registers the endpoint (setWebhook with the secret token) and serves
    /// the listener; registration and listening always start together.
    #[instrument(skip(self, bot, dispatcher))]
    pub async fn start(self, bot: Bot, dispatcher: Arc<Dispatcher>) -> Result<()> {
        match self {
            Transport::Polling => {
                info!("Starting in development mode with polling");
                teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
                    let dispatcher = dispatcher.clone();
                    async move {
                        handle_update(dispatcher, msg);
                        Ok(())
                    }
                })
                .await;
                Ok(())
            }
            Transport::Webhook {
                url,
                port,
                secret_token,
            } => {
                info!(url = %url, port, "Starting in production mode with webhook");
                let addr = SocketAddr::from(([0, 0, 0, 0], port));
                let options = webhooks::Options::new(addr, url).secret_token(secret_token);
                let listener = webhooks::axum(bot.clone(), options)
                    .await
                    .context("Failed to register webhook")?;
                teloxide::repl_with_listener(
                    bot,
                    move |_bot: Bot, msg: teloxide::types::Message| {
                        let dispatcher = dispatcher.clone();
                        async move {
                            handle_update(dispatcher, msg);
                            Ok(())
                        }
                    },
                    listener,
                )
                .await;
                Ok(())
            }
        }
    }
}

/// Converts one teloxide message and hands it to the dispatcher in a spawned
/// task so the update loop is never blocked by a slow gateway call.
fn handle_update(dispatcher: Arc<Dispatcher>, msg: teloxide::types::Message) {
    let inbound = TelegramMessageWrapper(&msg).to_core();
    tokio::spawn(async move {
        if let Err(e) = dispatcher.dispatch(&inbound).await {
            error!(error = %e, chat_id = inbound.chat.id, "Dispatch failed");
        }
    });
}
