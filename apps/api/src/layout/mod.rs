// Itinerary layout engine: text wrapping, page cursor, block rendering.
// Pure and synchronous; produces an in-memory `Document` that `render::pdf` serializes.

pub mod block;
pub mod cursor;
pub mod document;
pub mod font_metrics;
pub mod headings;
pub mod wrap;

use thiserror::Error;

// Re-export the public API consumed by the assembler and handlers.
pub use block::{render_block, Block};
pub use cursor::Cursor;
pub use document::{Document, DocumentBuilder};
pub use font_metrics::{default_page_config, FontStyle, PageConfig};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("page content area is empty ({width}pt x {height}pt)")]
    EmptyContentArea { width: f32, height: f32 },

    #[error("page content height {height}pt is shorter than the {header}pt document header")]
    HeaderDoesNotFit { header: f32, height: f32 },
}
