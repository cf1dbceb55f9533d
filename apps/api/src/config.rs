use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::weather::open_meteo::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Timeout for each weather HTTP call.
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let groq_api_key = require_env("GROQ_API_KEY")?;
        if groq_api_key.trim().is_empty() {
            bail!("GROQ_API_KEY is set but empty");
        }

        Ok(Config {
            groq_api_key,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            geocoding_url: std::env::var("GEOCODING_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODING_URL.to_string()),
            forecast_url: std::env::var("FORECAST_URL")
                .unwrap_or_else(|_| DEFAULT_FORECAST_URL.to_string()),
            http_timeout: Duration::from_secs(
                std::env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
