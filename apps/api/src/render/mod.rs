// Document assembly and PDF serialization.
// Rendering is CPU-bound; async callers run it inside tokio::task::spawn_blocking.

pub mod assembler;
pub mod pdf;

use thiserror::Error;

use crate::layout::LayoutError;

pub use assembler::{assemble, ItineraryDocument};

/// MIME type of every downloadable itinerary.
pub const PDF_MIME: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}
