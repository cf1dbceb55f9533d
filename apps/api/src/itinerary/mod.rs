// Trip planning: input validation, LLM itinerary generation, HTTP handlers.
// All LLM calls go through llm_client; all weather calls through weather.

pub mod generator;
pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub use generator::{ItineraryGenerator, LlmItineraryGenerator};

pub const MIN_DAYS: u8 = 1;
pub const MAX_DAYS: u8 = 5;

/// Validated trip inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Trimmed, never empty.
    pub city: String,
    pub interests: Vec<String>,
    /// Within `MIN_DAYS..=MAX_DAYS`.
    pub days: u8,
}

impl TripRequest {
    pub fn new(city: &str, interests_csv: &str, days: u8) -> Result<Self, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::Validation(
                "Please fill the City field before generating a plan.".to_string(),
            ));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(AppError::Validation(format!(
                "days must be between {MIN_DAYS} and {MAX_DAYS}, got {days}"
            )));
        }
        Ok(Self {
            city: city.to_string(),
            interests: parse_interests(interests_csv),
            days,
        })
    }

    pub fn interests_text(&self) -> String {
        self.interests.join(", ")
    }

    /// e.g. `New York — 3-Day Itinerary`.
    pub fn document_title(&self) -> String {
        format!("{} — {}-Day Itinerary", title_case(&self.city), self.days)
    }

    /// e.g. `itinerary_new_york_3d.pdf`.
    pub fn file_name(&self) -> String {
        format!(
            "itinerary_{}_{}d.pdf",
            self.city.replace(' ', "_").to_lowercase(),
            self.days
        )
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_interests(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
