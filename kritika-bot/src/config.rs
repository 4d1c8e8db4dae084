//! Bot configuration: Telegram access, Gemini access, transport mode
//! selection, and logging. Loaded from environment variables; the presence of
//! WEBHOOK_URL selects webhook mode.

use anyhow::Result;
use std::env;

/// Default webhook listen port.
pub const DEFAULT_PORT: u16 = 8443;

#[derive(Debug, Clone)]
pub struct Config {
    /// TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// GOOGLE_API_KEY
    pub google_api_key: String,
    /// WEBHOOK_URL: externally reachable base URL; presence selects webhook mode
    pub webhook_url: Option<String>,
    /// WEBHOOK_SECRET: shared secret Telegram echoes back on each push
    pub webhook_secret: Option<String>,
    /// PORT: webhook listen port
    pub port: u16,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL: custom Bot API server
    pub telegram_api_url: Option<String>,
    /// LOG_FILE: optional log tee target
    pub log_file: Option<String>,
    /// SYSTEM_PROMPT: overrides the built-in persona instruction
    pub system_prompt: Option<String>,
}

impl Config {
    /// Load from environment variables. `token` overrides TELEGRAM_BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("TELEGRAM_BOT_TOKEN not set"))?,
        };
        let google_api_key =
            env::var("GOOGLE_API_KEY").map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY not set"))?;
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty());
        let webhook_secret = env::var("WEBHOOK_SECRET")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            bot_token,
            google_api_key,
            webhook_url,
            webhook_secret,
            port,
            telegram_api_url,
            log_file,
            system_prompt,
        })
    }

    /// Validate config. Call after from_env() to fail fast before any
    /// component starts; a failure here aborts startup.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.webhook_url {
            if url::Url::parse(url_str).is_err() {
                anyhow::bail!("WEBHOOK_URL is set but not a valid URL: {}", url_str);
            }
            if self.webhook_secret.is_none() {
                anyhow::bail!("WEBHOOK_URL is set but WEBHOOK_SECRET is missing");
            }
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if url::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn polling_config() -> Config {
        Config {
            bot_token: "test_token".to_string(),
            google_api_key: "test_key".to_string(),
            webhook_url: None,
            webhook_secret: None,
            port: DEFAULT_PORT,
            telegram_api_url: None,
            log_file: None,
            system_prompt: None,
        }
    }

    #[test]
    #[serial]
    fn test_from_env_with_defaults() {
        env::set_var("TELEGRAM_BOT_TOKEN", "env_token");
        env::set_var("GOOGLE_API_KEY", "env_key");
        env::remove_var("WEBHOOK_URL");
        env::remove_var("WEBHOOK_SECRET");
        env::remove_var("PORT");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("LOG_FILE");
        env::remove_var("SYSTEM_PROMPT");

        let config = Config::from_env(None).unwrap();

        assert_eq!(config.bot_token, "env_token");
        assert_eq!(config.google_api_key, "env_key");
        assert!(config.webhook_url.is_none());
        assert_eq!(config.port, 8443);
        assert!(config.system_prompt.is_none());
        config.validate().unwrap();
    }

    #[test]
    #[serial]
    fn test_from_env_token_override_wins() {
        env::set_var("TELEGRAM_BOT_TOKEN", "env_token");
        env::set_var("GOOGLE_API_KEY", "env_key");

        let config = Config::from_env(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key_fails() {
        env::set_var("TELEGRAM_BOT_TOKEN", "env_token");
        env::remove_var("GOOGLE_API_KEY");

        assert!(Config::from_env(None).is_err());
    }

    #[test]
    fn test_validate_webhook_without_secret_fails() {
        let config = Config {
            webhook_url: Some("https://bot.example.com".to_string()),
            ..polling_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_webhook_with_secret_ok() {
        let config = Config {
            webhook_url: Some("https://bot.example.com".to_string()),
            webhook_secret: Some("shhh".to_string()),
            ..polling_config()
        };
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_bad_webhook_url_fails() {
        let config = Config {
            webhook_url: Some("not a url".to_string()),
            webhook_secret: Some("shhh".to_string()),
            ..polling_config()
        };
        assert!(config.validate().is_err());
    }
}
