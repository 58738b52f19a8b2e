use dotenvy::dotenv;
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
    #[error("invalid HOSTING value (expected true|false): {0}")]
    InvalidHosting(String),
    #[error("invalid WEBHOOK_URL: {0}")]
    InvalidWebhookUrl(String),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

/// How updates reach the bot.
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    /// Long polling, for local development.
    Polling,
    /// Telegram pushes updates to `url`; the server listens on `port`.
    Webhook { url: url::Url, port: u16 },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub token: String,
    pub delivery: Delivery,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if cfg!(not(test)) {
            let _ = dotenv();
        }

        let token =
            env::var("TELOXIDE_TOKEN").map_err(|_| ConfigError::MissingEnv("TELOXIDE_TOKEN"))?;

        let hosting_raw = env::var("HOSTING").map_err(|_| ConfigError::MissingEnv("HOSTING"))?;
        let hosting = match hosting_raw.to_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => return Err(ConfigError::InvalidHosting(other.to_string())),
        };

        if !hosting {
            return Ok(AppConfig {
                token,
                delivery: Delivery::Polling,
            });
        }

        let url = match env::var("WEBHOOK_URL") {
            Ok(s) if !s.trim().is_empty() => {
                url::Url::parse(&s).map_err(|_| ConfigError::InvalidWebhookUrl(s.clone()))?
            }
            _ => return Err(ConfigError::MissingEnv("WEBHOOK_URL")),
        };

        let port = match env::var("PORT") {
            Ok(s) => s.parse::<u16>().map_err(|_| ConfigError::InvalidPort(s))?,
            Err(_) => 8080,
        };

        Ok(AppConfig {
            token,
            delivery: Delivery::Webhook { url, port },
        })
    }
}
