//! Open-Meteo geocoding + forecast client. No API key required.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::weather::{DailyForecast, Forecast, Location, WeatherError, WeatherProvider};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const DAILY_FIELDS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

/// Parallel per-day arrays, indexed like `time`.
#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    weathercode: Vec<Option<i64>>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability_max: Vec<Option<f64>>,
}

impl GeocodingResponse {
    fn into_location(self) -> Result<Location, WeatherError> {
        let first = self
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or(WeatherError::CityNotFound)?;
        let label = match first.country.as_deref() {
            Some(country) if !country.is_empty() => format!("{}, {}", first.name, country),
            _ => first.name,
        };
        Ok(Location {
            latitude: first.latitude,
            longitude: first.longitude,
            label,
        })
    }
}

impl DailyBlock {
    fn into_days(self) -> Vec<DailyForecast> {
        self.time
            .into_iter()
            .enumerate()
            .map(|(i, date)| DailyForecast {
                date,
                weather_code: self.weathercode.get(i).copied().flatten(),
                temp_max_c: self.temperature_2m_max.get(i).copied().flatten(),
                temp_min_c: self.temperature_2m_min.get(i).copied().flatten(),
                precipitation_probability: self
                    .precipitation_probability_max
                    .get(i)
                    .copied()
                    .flatten(),
            })
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    pub fn new(
        geocoding_url: String,
        forecast_url: String,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            geocoding_url,
            forecast_url,
        })
    }

    /// Resolves a city name to coordinates using the top geocoding hit.
    pub async fn geocode(&self, city: &str) -> Result<Location, WeatherError> {
        let body = self
            .client
            .get(&self.geocoding_url)
            .query(&[("name", city), ("count", "1")])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode::<GeocodingResponse>(&body)?.into_location()
    }

    /// Daily forecast for `[start, end]` inclusive, in the location's local timezone.
    pub async fn daily(
        &self,
        location: &Location,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyForecast>, WeatherError> {
        let body = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("start_date", start.to_string()),
                ("end_date", end.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(decode::<ForecastResponse>(&body)?.daily.into_days())
    }
}

/// Bodies that are not the expected JSON become `WeatherError::Malformed`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, WeatherError> {
    Ok(serde_json::from_str(body)?)
}

/// `[today, today + days - 1]` in UTC.
pub fn forecast_window(today: NaiveDate, days: u8) -> Result<(NaiveDate, NaiveDate), WeatherError> {
    let span = u64::from(days.max(1) - 1);
    let end = today
        .checked_add_days(Days::new(span))
        .ok_or_else(|| WeatherError::InvalidWindow(format!("date overflow adding {span} days")))?;
    Ok((today, end))
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn forecast(&self, city: &str, days: u8) -> Result<Forecast, WeatherError> {
        let location = self.geocode(city).await?;
        debug!(
            city,
            label = %location.label,
            lat = location.latitude,
            lon = location.longitude,
            "Geocoded city"
        );
        let (start, end) = forecast_window(Utc::now().date_naive(), days)?;
        let days = self.daily(&location, start, end).await?;
        Ok(Forecast {
            label: location.label,
            days,
        })
    }
}
