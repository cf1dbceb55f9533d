//! Document assembler — title block plus the Interests, Weather and Itinerary
//! blocks, in that order, on A4 pages.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::layout::headings::strip_headings;
use crate::layout::{render_block, Block, Cursor, Document, DocumentBuilder, FontStyle, PageConfig};
use crate::render::pdf::write_pdf;
use crate::render::RenderError;

/// Format of the `Generated:` line, e.g. `01 May 2026, 09:30 AM`.
pub const GENERATED_AT_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Drawn in place of an empty interests list.
const NO_INTERESTS: &str = "—";

/// Everything that goes into one itinerary PDF.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryDocument<'a> {
    pub title: &'a str,
    pub generated_at: NaiveDateTime,
    pub interests: &'a str,
    /// Weather summary markdown, or a failure placeholder. Rendered as text either way.
    pub weather: &'a str,
    /// Itinerary markdown as returned by the generator.
    pub itinerary: &'a str,
}

/// Lays out the document without serializing it.
pub fn layout_document(
    input: &ItineraryDocument<'_>,
    config: &PageConfig,
) -> Result<Document, RenderError> {
    config.validate()?;

    let mut builder = DocumentBuilder::new(config, input.title, input.generated_at);
    let mut cursor = Cursor::new(config);
    let left = config.left();

    builder.draw_text(
        left,
        cursor.y(),
        FontStyle::Bold,
        config.doc_title_font_size_pt,
        input.title,
    );
    cursor.advance(config.doc_title_line_height_pt);

    let generated = format!("Generated: {}", input.generated_at.format(GENERATED_AT_FORMAT));
    builder.draw_text(
        left,
        cursor.y(),
        FontStyle::Regular,
        config.timestamp_font_size_pt,
        &generated,
    );
    cursor.advance(config.timestamp_line_height_pt);

    let interests = if input.interests.trim().is_empty() {
        NO_INTERESTS
    } else {
        input.interests
    };
    let weather = strip_headings(input.weather);
    let itinerary = strip_headings(input.itinerary);

    cursor = render_block(&mut builder, cursor, &Block::plain("Interests", interests));
    cursor = render_block(&mut builder, cursor, &Block::plain("Weather", &weather));
    render_block(&mut builder, cursor, &Block::bullets("Itinerary", &itinerary));

    Ok(builder.finish())
}

/// Lays out and serializes the itinerary PDF.
pub fn assemble(input: &ItineraryDocument<'_>, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let document = layout_document(input, config)?;
    debug!(
        title = %document.title,
        pages = document.pages.len(),
        "Itinerary laid out"
    );
    write_pdf(&document)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, LayoutError};
    use chrono::NaiveDate;

    fn pinned() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn paris_itinerary() -> String {
        let mut md = String::new();
        for day in 1..=3 {
            md.push_str(&format!("## Day {day}\n"));
            for stop in 1..=5 {
                md.push_str(&format!(
                    "- {h}:00 AM — Visit landmark {stop} of day {day}, then wander through the \
                     surrounding historic quarter with its narrow lanes, bookshops and galleries, \
                     stop for coffee at a small café on the square, and continue along the river \
                     embankment towards the next neighbourhood before the crowds arrive\n",
                    h = 8 + stop
                ));
            }
            md.push('\n');
        }
        md
    }

    fn input<'a>(weather: &'a str, itinerary: &'a str) -> ItineraryDocument<'a> {
        ItineraryDocument {
            title: "Paris — 3-Day Itinerary",
            generated_at: pinned(),
            interests: "museums, food, architecture",
            weather,
            itinerary,
        }
    }

    #[test]
    fn test_header_lines_come_first() {
        let config = default_page_config();
        let itinerary = paris_itinerary();
        let doc = layout_document(&input("sunny", &itinerary), &config).unwrap();
        let first = &doc.pages[0].segments;
        assert_eq!(first[0].text, "Paris — 3-Day Itinerary");
        assert_eq!(first[0].style, FontStyle::Bold);
        assert_eq!(first[1].text, "Generated: 01 May 2026, 09:30 AM");
        assert_eq!(first[2].text, "Interests");
        assert_eq!(first[3].text, "museums, food, architecture");
        assert_eq!(first[4].text, "Weather");
    }

    #[test]
    fn test_empty_interests_render_dash() {
        let config = default_page_config();
        let mut doc_input = input("sunny", "## Day 1\n- Walk");
        doc_input.interests = "  ";
        let doc = layout_document(&doc_input, &config).unwrap();
        assert_eq!(doc.pages[0].segments[3].text, "—");
    }

    #[test]
    fn test_weather_heading_stripped() {
        let config = default_page_config();
        let weather = "### 🌤 Weather — Paris, France\n- **2026-05-01** — Clear sky";
        let doc = layout_document(&input(weather, "- Walk"), &config).unwrap();
        let texts: Vec<&str> = doc.segments().map(|s| s.text.as_str()).collect();
        assert!(texts.contains(&"🌤 Weather — Paris, France"));
        assert!(texts.contains(&"- **2026-05-01** — Clear sky"), "weather stays in plain mode");
    }

    #[test]
    fn test_paris_three_days_spans_pages_with_plain_headings() {
        // 14pt body: roughly 70 characters per line across the A4 content width.
        let mut config = default_page_config();
        config.body_font_size_pt = 14.0;
        config.line_height_pt = 18.0;

        let itinerary = paris_itinerary();
        let doc = layout_document(&input("Sunny all week", &itinerary), &config).unwrap();

        assert!(doc.pages.len() >= 2, "got {} page(s)", doc.pages.len());
        assert!(doc.segments().all(|s| !s.text.contains('#')));
        for day in 1..=3 {
            let heading = format!("Day {day}");
            assert!(doc.segments().any(|s| s.text == heading), "missing {heading}");
        }

        let bullet_lines: Vec<&str> = doc
            .segments()
            .map(|s| s.text.as_str())
            .filter(|t| t.starts_with('•'))
            .collect();
        assert_eq!(bullet_lines.len(), 15);
        for line in bullet_lines {
            assert!(line.starts_with("• ") && !line.starts_with("• •"), "{line:?}");
        }
        assert!(doc
            .segments()
            .all(|s| !s.text.starts_with("- ") && !s.text.starts_with("* ")));
    }

    #[test]
    fn test_weather_failure_rendered_verbatim() {
        let config = default_page_config();
        let warning = "⚠️ Weather fetch failed: City not found";
        let doc = layout_document(&input(warning, "## Day 1\n- Walk"), &config).unwrap();
        assert_eq!(doc.pages.len(), 1);
        let texts: Vec<&str> = doc.segments().map(|s| s.text.as_str()).collect();
        let at = texts.iter().position(|t| *t == "Weather").unwrap();
        assert_eq!(texts[at + 1], warning);
        assert_eq!(texts[at + 2], "Itinerary");
    }

    #[test]
    fn test_oversized_word_overflows_on_own_line() {
        let config = default_page_config();
        let word = "w".repeat(400);
        let itinerary = format!("## Day 1\n- Walk to {word} and back");
        let doc = layout_document(&input("sunny", &itinerary), &config).unwrap();
        let texts: Vec<&str> = doc.segments().map(|s| s.text.as_str()).collect();
        assert!(texts.contains(&word.as_str()));
        assert!(texts.contains(&"• Walk to"));
        assert!(texts.contains(&"and back"));
    }

    #[test]
    fn test_assemble_deterministic_with_pinned_timestamp() {
        let config = default_page_config();
        let itinerary = paris_itinerary();
        let doc_input = input("### 🌤 Weather — Paris\n- mild", &itinerary);
        let first = assemble(&doc_input, &config).unwrap();
        let second = assemble(&doc_input, &config).unwrap();
        assert!(first.starts_with(b"%PDF"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_assemble_rejects_degenerate_geometry() {
        let mut config = default_page_config();
        config.margin_top_pt = 500.0;
        config.margin_bottom_pt = 500.0;
        let result = assemble(&input("sunny", "- Walk"), &config);
        assert!(matches!(result, Err(RenderError::Layout(_))));
    }

    #[test]
    fn test_assemble_rejects_page_shorter_than_header() {
        let mut config = default_page_config();
        config.margin_bottom_pt = config.page_height_pt - config.margin_top_pt - 20.0;
        let result = assemble(&input("sunny", "- Walk"), &config);
        assert!(matches!(
            result,
            Err(RenderError::Layout(LayoutError::HeaderDoesNotFit { .. }))
        ));
    }
}
