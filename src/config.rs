//! Configuration loaded from environment variables.
//!
//! ## Variables
//!
//! - `RUST_LOG` - Log level / filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `TOKEN_SIGNING_SECRET` - HMAC key for API token hashing (optional;
//!   policies using `"token"` need it)
//! - `TOKEN_COOKIE` - Cookie name also accepted for API tokens (optional)

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// HMAC signing secret used to hash API tokens.
    pub token_signing_secret: Option<String>,
    pub token_cookie: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let token_signing_secret = env::var("TOKEN_SIGNING_SECRET").ok();
        let token_cookie = env::var("TOKEN_COOKIE").ok();

        Self {
            log_level,
            log_format,
            token_signing_secret,
            token_cookie,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `token_signing_secret` is set but empty
    /// - `token_cookie` is set but empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.token_signing_secret.as_deref() == Some("") {
            anyhow::bail!("TOKEN_SIGNING_SECRET must not be empty when set");
        }

        if self.token_cookie.as_deref() == Some("") {
            anyhow::bail!("TOKEN_COOKIE must not be empty when set");
        }

        Ok(())
    }

    /// Logs a configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Token signing secret: {}",
            mask_secret(self.token_signing_secret.as_deref())
        );
        if let Some(ref cookie) = self.token_cookie {
            tracing::info!("  Token cookie: {}", cookie);
        }
    }
}

fn mask_secret(secret: Option<&str>) -> &'static str {
    match secret {
        Some(_) => "***",
        None => "not set",
    }
}

/// Loads and validates configuration from environment variables.
///
/// Expects `.env` to be already loaded (e.g. via `dotenvy::dotenv()`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns an error if the filter does not parse or a subscriber is
/// already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        builder.try_init().map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(())
}
