use std::sync::Arc;

use crate::itinerary::ItineraryGenerator;
use crate::layout::PageConfig;
use crate::weather::WeatherProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: every plan and every PDF is built from the request alone.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable itinerary source. Default: LlmItineraryGenerator.
    pub generator: Arc<dyn ItineraryGenerator>,
    /// Pluggable forecast source. Default: OpenMeteoClient.
    pub weather: Arc<dyn WeatherProvider>,
    /// Page geometry for PDF export: A4 with 2 cm margins.
    pub page_config: PageConfig,
}
