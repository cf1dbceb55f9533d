mod config;
mod errors;
mod itinerary;
mod layout;
mod llm_client;
mod render;
mod routes;
mod state;
mod weather;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::itinerary::LlmItineraryGenerator;
use crate::layout::default_page_config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::weather::OpenMeteoClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing GROQ_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Itinerary API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize weather client (Open-Meteo, no key)
    let weather = OpenMeteoClient::new(
        config.geocoding_url.clone(),
        config.forecast_url.clone(),
        config.http_timeout,
    )?;
    info!(
        geocoding = %config.geocoding_url,
        forecast = %config.forecast_url,
        "Weather client initialized"
    );

    // A4, 2 cm margins, Helvetica 11pt
    let page_config = default_page_config();
    info!(
        "Layout page config: {:.1}x{:.1}pt, {}pt body",
        page_config.page_width_pt, page_config.page_height_pt, page_config.body_font_size_pt
    );

    let state = AppState {
        generator: Arc::new(LlmItineraryGenerator::new(llm)),
        weather: Arc::new(weather),
        page_config,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
