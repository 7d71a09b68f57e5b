//! Configuration module.
//!
//! Loads configuration from environment variables (a `.env` file is honoured).

use std::env;

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_WEBHOOK_PORT: u16 = 8443;

/// Bot running mode
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Configuration problems detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("WEBHOOK_URL must be set when BOT_MODE is webhook")]
    MissingWebhookUrl,

    #[error("invalid WEBHOOK_URL: {0}")]
    InvalidWebhookUrl(#[from] url::ParseError),

    #[error("invalid WEBHOOK_PORT '{0}'")]
    InvalidWebhookPort(String),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub bot_mode: BotMode,

    /// Bot username (without @), used to recognise `/cmd@username`.
    /// Fetched via getMe when not set.
    pub bot_username: Option<String>,

    pub webhook_url: Option<Url>,
    pub webhook_port: u16,
    pub webhook_secret: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = var("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let bot_mode = match var("BOT_MODE").map(|m| m.to_lowercase()).as_deref() {
            Some("webhook") => BotMode::Webhook,
            _ => BotMode::Polling,
        };

        let webhook_url = var("WEBHOOK_URL").map(|u| Url::parse(&u)).transpose()?;

        // Validate webhook URL is set if mode is webhook
        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::MissingWebhookUrl);
        }

        let webhook_port = match var("WEBHOOK_PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidWebhookPort(port))?,
            None => DEFAULT_WEBHOOK_PORT,
        };

        // Strip @ if present
        let bot_username = var("BOT_USERNAME")
            .map(|s| s.trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            bot_token,
            bot_mode,
            bot_username,
            webhook_url,
            webhook_port,
            webhook_secret: var("WEBHOOK_SECRET"),
        })
    }
}
