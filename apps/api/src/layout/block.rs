//! Block renderer — draws one titled section onto the page flow.
//!
//! # Flow per block
//! 1. Bold title at the cursor, then advance by the title line height.
//! 2. Body split on explicit breaks; in bullet mode list markers are normalized.
//! 3. Each line wrapped to the content width.
//! 4. Each wrapped line: advance first, break the page if the cursor fell below
//!    the bottom margin, then draw. A line is never drawn below the margin.
//! 5. One block gap after the last line.

use std::borrow::Cow;

use crate::layout::cursor::Cursor;
use crate::layout::document::DocumentBuilder;
use crate::layout::font_metrics::{get_metrics, FontStyle};
use crate::layout::wrap::wrap;

/// Glyph every list item is rewritten to in bullet mode.
pub const BULLET_GLYPH: &str = "• ";

const BULLET_MARKERS: [char; 3] = ['*', '-', '•'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    /// Body lines are wrapped as-is.
    Plain,
    /// Lines starting with `*`, `-` or `•` become `• <text>`.
    Bullet,
}

#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub mode: BlockMode,
}

impl<'a> Block<'a> {
    pub fn plain(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            mode: BlockMode::Plain,
        }
    }

    pub fn bullets(title: &'a str, body: &'a str) -> Self {
        Self {
            title,
            body,
            mode: BlockMode::Bullet,
        }
    }
}

/// Rewrites a list line to start with exactly one `BULLET_GLYPH`.
/// Lines that are not list items are returned unchanged.
pub fn normalize_bullet(line: &str) -> Cow<'_, str> {
    let trimmed = line.trim();
    if !trimmed.starts_with(BULLET_MARKERS) {
        return Cow::Borrowed(line);
    }
    let item = trimmed.trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c == ' ');
    Cow::Owned(format!("{BULLET_GLYPH}{}", item.trim()))
}

/// Renders `block` into `doc` starting at `cursor`, returning the cursor
/// positioned after the block and its trailing gap.
pub fn render_block(doc: &mut DocumentBuilder<'_>, mut cursor: Cursor, block: &Block<'_>) -> Cursor {
    let config = doc.config();
    let left = config.left();

    // The previous block's gap may have left the cursor under the margin.
    if cursor.needs_new_page() {
        doc.break_page(&mut cursor);
    }
    doc.draw_text(
        left,
        cursor.y(),
        FontStyle::Bold,
        config.block_title_font_size_pt,
        block.title,
    );
    cursor.advance(config.block_title_line_height_pt);

    if !block.body.is_empty() {
        let metrics = get_metrics(FontStyle::Regular);
        let width = config.content_width();

        for raw_line in block.body.split('\n') {
            let raw_line = raw_line.trim_end_matches('\r');
            let line = match block.mode {
                BlockMode::Bullet => normalize_bullet(raw_line),
                BlockMode::Plain => Cow::Borrowed(raw_line),
            };

            for segment in wrap(&line, metrics, config.body_font_size_pt, width) {
                cursor.advance(config.line_height_pt);
                if cursor.needs_new_page() {
                    doc.break_page(&mut cursor);
                }
                if !segment.is_empty() {
                    doc.draw_text(
                        left,
                        cursor.y(),
                        FontStyle::Regular,
                        config.body_font_size_pt,
                        &segment,
                    );
                }
            }
        }
    }

    cursor.advance(config.block_gap_pt);
    cursor
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
