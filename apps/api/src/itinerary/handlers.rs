//! Axum route handlers for trip planning and PDF export.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::itinerary::TripRequest;
use crate::render::{assemble, ItineraryDocument, PDF_MIME};
use crate::routes::pages::{render_form_page, render_result_page};
use crate::state::AppState;
use crate::weather::{is_weather_failure, weather_summary};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Form and JSON body for a plan request. `interests` is comma-separated.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    pub city: String,
    #[serde(default)]
    pub interests: String,
    pub days: u8,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub city: String,
    pub days: u8,
    pub interests: Vec<String>,
    pub itinerary: String,
    pub weather: String,
    pub weather_available: bool,
    pub file_name: String,
}

/// Everything needed to render the PDF again without regenerating.
#[derive(Debug, Deserialize)]
pub struct PdfRequest {
    pub city: String,
    pub days: u8,
    #[serde(default)]
    pub interests: String,
    pub itinerary: String,
    #[serde(default)]
    pub weather: String,
}

/// Result of one generation run.
pub struct Plan {
    pub trip: TripRequest,
    pub itinerary: String,
    pub weather: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plan
///
/// Generates the itinerary, then fetches the weather. Weather failures are
/// reported in-band via `weather_available: false`.
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let trip = TripRequest::new(&request.city, &request.interests, request.days)?;
    let plan = build_plan(&state, trip).await?;

    Ok(Json(PlanResponse {
        file_name: plan.trip.file_name(),
        weather_available: !is_weather_failure(&plan.weather),
        city: plan.trip.city,
        days: plan.trip.days,
        interests: plan.trip.interests,
        itinerary: plan.itinerary,
        weather: plan.weather,
    }))
}

/// POST /api/v1/plan/pdf
pub async fn handle_pdf(
    State(state): State<AppState>,
    Json(request): Json<PdfRequest>,
) -> Result<Response, AppError> {
    render_pdf_response(&state, request).await
}

/// POST /plan
///
/// Form submission from the planner page. A blank city re-renders the form
/// with the validation message instead of returning JSON.
pub async fn handle_plan_form(
    State(state): State<AppState>,
    Form(request): Form<PlanRequest>,
) -> Result<Response, AppError> {
    let trip = match TripRequest::new(&request.city, &request.interests, request.days) {
        Ok(trip) => trip,
        Err(AppError::Validation(message)) => {
            return Ok((StatusCode::BAD_REQUEST, Html(render_form_page(Some(&message)))).into_response());
        }
        Err(e) => return Err(e),
    };
    let plan = build_plan(&state, trip).await?;
    Ok(Html(render_result_page(&plan)).into_response())
}

/// POST /plan/pdf
pub async fn handle_pdf_form(
    State(state): State<AppState>,
    Form(request): Form<PdfRequest>,
) -> Result<Response, AppError> {
    render_pdf_response(&state, request).await
}

// ────────────────────────────────────────────────────────────────────────────
// Internal helpers
// ────────────────────────────────────────────────────────────────────────────

/// Itinerary first, then weather, sequentially.
async fn build_plan(state: &AppState, trip: TripRequest) -> Result<Plan, AppError> {
    info!(city = %trip.city, days = trip.days, interests = ?trip.interests, "Planning trip");

    let itinerary = state.generator.generate(&trip).await?;
    let weather = weather_summary(state.weather.as_ref(), &trip.city, trip.days).await;

    Ok(Plan {
        trip,
        itinerary,
        weather,
    })
}

async fn render_pdf_response(state: &AppState, request: PdfRequest) -> Result<Response, AppError> {
    let trip = TripRequest::new(&request.city, &request.interests, request.days)?;
    let title = trip.document_title();
    let interests = trip.interests_text();
    let file_name = trip.file_name();
    let config = state.page_config.clone();
    let generated_at = Local::now().naive_local();

    // Layout and serialization are CPU-bound; run them off the async executor.
    let bytes = tokio::task::spawn_blocking(move || {
        assemble(
            &ItineraryDocument {
                title: &title,
                generated_at,
                interests: &interests,
                weather: &request.weather,
                itinerary: &request.itinerary,
            },
            &config,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF render: {e}")))??;

    info!(file = %file_name, bytes = bytes.len(), "Itinerary PDF rendered");

    Ok((
        [
            (header::CONTENT_TYPE, PDF_MIME.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&file_name)),
        ],
        bytes,
    )
        .into_response())
}

/// `attachment; filename="..."` with anything outside printable ASCII replaced,
/// since header values cannot carry it.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
