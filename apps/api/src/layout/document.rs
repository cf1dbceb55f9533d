//! In-memory page model produced by the layout pass and consumed by the PDF writer.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::layout::cursor::Cursor;
use crate::layout::font_metrics::{FontStyle, PageConfig};

/// One run of text drawn at a fixed baseline position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSegment {
    pub x: f32,
    pub y: f32,
    pub style: FontStyle,
    pub font_size_pt: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub segments: Vec<TextSegment>,
}

/// A finished, immutable document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    /// Written into the PDF metadata. The only time-dependent input.
    pub generated_at: NaiveDateTime,
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub pages: Vec<Page>,
}

/// Accumulates pages while blocks are rendered. Passed by `&mut` through the
/// block renderer; the cursor travels separately by value.
pub struct DocumentBuilder<'a> {
    config: &'a PageConfig,
    title: String,
    generated_at: NaiveDateTime,
    pages: Vec<Page>,
    current: Page,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(config: &'a PageConfig, title: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            config,
            title: title.into(),
            generated_at,
            pages: Vec::new(),
            current: Page::default(),
        }
    }

    pub fn config(&self) -> &'a PageConfig {
        self.config
    }

    pub fn draw_text(&mut self, x: f32, y: f32, style: FontStyle, font_size_pt: f32, text: &str) {
        self.current.segments.push(TextSegment {
            x,
            y,
            style,
            font_size_pt,
            text: text.to_string(),
        });
    }

    /// Flushes the current page, opens a new one, and moves the cursor back to
    /// the top margin.
    pub fn break_page(&mut self, cursor: &mut Cursor) {
        self.pages.push(std::mem::take(&mut self.current));
        cursor.reset();
    }

    pub fn finish(mut self) -> Document {
        self.pages.push(self.current);
        Document {
            title: self.title,
            generated_at: self.generated_at,
            page_width_pt: self.config.page_width_pt,
            page_height_pt: self.config.page_height_pt,
            pages: self.pages,
        }
    }
}

impl Document {
    /// All segments in drawing order, across pages.
    pub fn segments(&self) -> impl Iterator<Item = &TextSegment> {
        self.pages.iter().flat_map(|p| p.segments.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::default_page_config;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    #[test]
    fn test_builder_always_has_one_page() {
        let config = default_page_config();
        let doc = DocumentBuilder::new(&config, "Empty", timestamp()).finish();
        assert_eq!(doc.pages.len(), 1);
        assert!(doc.pages[0].segments.is_empty());
    }

    #[test]
    fn test_break_page_flushes_and_resets_cursor() {
        let config = default_page_config();
        let mut builder = DocumentBuilder::new(&config, "Two pages", timestamp());
        let mut cursor = Cursor::new(&config);
        builder.draw_text(config.left(), cursor.y(), FontStyle::Regular, 11.0, "first");
        cursor.advance(500.0);
        builder.break_page(&mut cursor);
        assert_eq!(cursor.y(), config.top());
        builder.draw_text(config.left(), cursor.y(), FontStyle::Regular, 11.0, "second");

        let doc = builder.finish();
        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].segments[0].text, "first");
        assert_eq!(doc.pages[1].segments[0].text, "second");
        assert_eq!(doc.segments().count(), 2);
    }
}
