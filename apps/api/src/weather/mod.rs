// Weather lookup: city -> coordinates -> daily forecast -> markdown summary.
// Failures never propagate: the summary degrades to a warning line that the
// PDF renders as ordinary text.

pub mod codes;
pub mod open_meteo;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

pub use open_meteo::OpenMeteoClient;

/// Leading text of every failure placeholder.
pub const WEATHER_FAILURE_PREFIX: &str = "⚠️ Weather fetch failed";

/// Shown for forecast values Open-Meteo reported as `null`.
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("City not found")]
    CityNotFound,

    #[error("Malformed weather response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid forecast window: {0}")]
    InvalidWindow(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// `"<name>, <country>"`, or just the name when the country is unknown.
    pub label: String,
}

/// One forecast day. Open-Meteo reports `null` for values it has no data for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: String,
    pub weather_code: Option<i64>,
    pub temp_max_c: Option<f64>,
    pub temp_min_c: Option<f64>,
    pub precipitation_probability: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub label: String,
    pub days: Vec<DailyForecast>,
}

/// Source of daily forecasts. `OpenMeteoClient` in production; stubs in tests.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn forecast(&self, city: &str, days: u8) -> Result<Forecast, WeatherError>;
}

/// Fetches and formats the forecast, or returns the failure placeholder.
pub async fn weather_summary(provider: &dyn WeatherProvider, city: &str, days: u8) -> String {
    match provider.forecast(city, days).await {
        Ok(forecast) => {
            info!(city, label = %forecast.label, days = forecast.days.len(), "Weather fetched");
            format_forecast(&forecast)
        }
        Err(e) => {
            warn!(city, error = %e, "Weather fetch failed");
            failure_placeholder(&e)
        }
    }
}

pub fn failure_placeholder(error: &WeatherError) -> String {
    format!("{WEATHER_FAILURE_PREFIX}: {error}")
}

pub fn is_weather_failure(summary: &str) -> bool {
    summary.starts_with(WEATHER_FAILURE_PREFIX)
}

/// Markdown summary: a `###` heading with the location label, then one bullet per day.
pub fn format_forecast(forecast: &Forecast) -> String {
    let mut lines = Vec::with_capacity(forecast.days.len() + 1);
    lines.push(format!("### 🌤 Weather — {}", forecast.label));
    for day in &forecast.days {
        lines.push(format!(
            "- **{}** — {}; **{}–{}°C**, rain chance: **{}%**",
            day.date,
            codes::describe(day.weather_code),
            temperature(day.temp_min_c),
            temperature(day.temp_max_c),
            percentage(day.precipitation_probability),
        ));
    }
    lines.join("\n")
}

/// Always keeps one decimal place for whole degrees: `9.0`, `19.4`.
fn temperature(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:?}"))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

fn percentage(value: Option<f64>) -> String {
    value
        .map(|v| format!("{v:.0}"))
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
