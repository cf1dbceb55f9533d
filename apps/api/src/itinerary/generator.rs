//! Itinerary generation: prompt formatting plus the LLM call.

use async_trait::async_trait;
use tracing::info;

use crate::itinerary::prompts::{
    DEFAULT_INTERESTS, ITINERARY_SYSTEM_TEMPLATE, ITINERARY_USER_PROMPT,
};
use crate::itinerary::TripRequest;
use crate::llm_client::{LlmClient, LlmError};

/// Produces itinerary markdown for a trip. The output is not validated: the
/// renderer consumes whatever text comes back.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(&self, trip: &TripRequest) -> Result<String, LlmError>;
}

/// Default generator backed by the shared `LlmClient`.
pub struct LlmItineraryGenerator {
    llm: LlmClient,
}

impl LlmItineraryGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ItineraryGenerator for LlmItineraryGenerator {
    async fn generate(&self, trip: &TripRequest) -> Result<String, LlmError> {
        let system = build_system_prompt(trip);
        let itinerary = self.llm.call_text(&system, ITINERARY_USER_PROMPT).await?;
        info!(
            city = %trip.city,
            days = trip.days,
            chars = itinerary.len(),
            "Itinerary generated"
        );
        Ok(itinerary)
    }
}

pub fn build_system_prompt(trip: &TripRequest) -> String {
    let interests = if trip.interests.is_empty() {
        DEFAULT_INTERESTS.to_string()
    } else {
        trip.interests_text()
    };
    ITINERARY_SYSTEM_TEMPLATE
        .replace("{days}", &trip.days.to_string())
        .replace("{city}", &trip.city)
        .replace("{interests}", &interests)
}
