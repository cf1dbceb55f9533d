use crate::layout::font_metrics::PageConfig;

/// Vertical write position on the current page, in PDF points.
///
/// Only moves down within a page. Crossing below `bottom` is a signal, not an
/// error: the caller starts a new page and calls `reset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: f32,
    top: f32,
    bottom: f32,
}

impl Cursor {
    /// A cursor at the top margin of a fresh page.
    pub fn new(config: &PageConfig) -> Self {
        Self {
            y: config.top(),
            top: config.top(),
            bottom: config.bottom(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self, line_height: f32) -> f32 {
        self.y -= line_height;
        self.y
    }

    pub fn needs_new_page(&self) -> bool {
        self.y < self.bottom
    }

    pub fn reset(&mut self) {
        self.y = self.top;
    }
}
