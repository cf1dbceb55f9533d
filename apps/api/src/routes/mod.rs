pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::itinerary::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::handle_form_page))
        .route("/health", get(health::health_handler))
        // Browser form flow
        .route("/plan", post(handlers::handle_plan_form))
        .route("/plan/pdf", post(handlers::handle_pdf_form))
        // JSON API
        .route("/api/v1/plan", post(handlers::handle_plan))
        .route("/api/v1/plan/pdf", post(handlers::handle_pdf))
        .with_state(state)
}
