//! Greedy word wrap against a static font-metric table.
//!
//! Explicit `\n` breaks are hard: each explicit line wraps on its own. Breaks
//! only happen at whitespace, so a single token wider than the line is emitted
//! alone and overflows rather than being split.

use crate::layout::font_metrics::{units_to_pt, FontMetricTable};

/// Wraps `text` into lines no wider than `max_width_pt` at `font_size_pt`.
///
/// An empty input line produces one empty output line, so blank lines survive
/// as vertical space.
pub fn wrap(
    text: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| wrap_line(line, metrics, font_size_pt, max_width_pt))
        .collect()
}

fn wrap_line(
    line: &str,
    metrics: &FontMetricTable,
    font_size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let space_units = metrics.char_units(' ');
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_units = 0u32;

    for word in line.split_whitespace() {
        let word_units = metrics.measure_units(word);

        if current.is_empty() {
            current.push_str(word);
            current_units = word_units;
            continue;
        }

        let candidate = current_units + space_units + word_units;
        if units_to_pt(candidate, font_size_pt) > max_width_pt {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_units = word_units;
        } else {
            current.push(' ');
            current.push_str(word);
            current_units = candidate;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
