//! Static font-metric tables for the two standard PDF fonts the itinerary uses.
//!
//! Widths are Adobe AFM advance widths in 1/1000 em. Helvetica and Helvetica-Bold
//! are base-14 fonts: every PDF viewer ships them, nothing is embedded, and the
//! tables below are exact for printable ASCII plus the few WinAnsi glyphs the
//! itinerary text actually produces (bullet, dashes, degree sign).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

use crate::layout::LayoutError;

/// Points per centimetre (PostScript points, 72 per inch).
pub const PT_PER_CM: f32 = 72.0 / 2.54;

// ────────────────────────────────────────────────────────────────────────────
// Font style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    /// Body text.
    Regular,
    /// Document title, block titles.
    Bold,
}

impl FontStyle {
    /// PostScript name written into the PDF font dictionary.
    pub fn base_font(self) -> &'static str {
        match self {
            FontStyle::Regular => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
        }
    }

    /// Name of the font in each page's resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontStyle::Regular => "F1",
            FontStyle::Bold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry and type sizes for one rendered document.
///
/// All values are in PDF points with the origin at the bottom-left corner, so
/// the cursor starts at `top()` and moves down towards `bottom()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_left_pt: f32,
    pub margin_right_pt: f32,
    pub margin_top_pt: f32,
    pub margin_bottom_pt: f32,
    pub body_font_size_pt: f32,
    /// Vertical advance per wrapped body line.
    pub line_height_pt: f32,
    pub block_title_font_size_pt: f32,
    pub block_title_line_height_pt: f32,
    pub doc_title_font_size_pt: f32,
    pub doc_title_line_height_pt: f32,
    pub timestamp_font_size_pt: f32,
    pub timestamp_line_height_pt: f32,
    /// Extra space left after each block.
    pub block_gap_pt: f32,
}

/// Returns the default page config: A4 portrait, 2 cm margins, Helvetica 11pt
/// on a 14pt leading.
pub fn default_page_config() -> PageConfig {
    let margin = 2.0 * PT_PER_CM;
    PageConfig {
        page_width_pt: 21.0 * PT_PER_CM,
        page_height_pt: 29.7 * PT_PER_CM,
        margin_left_pt: margin,
        margin_right_pt: margin,
        margin_top_pt: margin,
        margin_bottom_pt: margin,
        body_font_size_pt: 11.0,
        line_height_pt: 14.0,
        block_title_font_size_pt: 12.0,
        block_title_line_height_pt: 12.0,
        doc_title_font_size_pt: 16.0,
        doc_title_line_height_pt: 18.0,
        timestamp_font_size_pt: 10.0,
        timestamp_line_height_pt: 12.0,
        block_gap_pt: 14.0,
    }
}

impl PageConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width_pt - self.margin_left_pt - self.margin_right_pt
    }

    pub fn content_height(&self) -> f32 {
        self.page_height_pt - self.margin_top_pt - self.margin_bottom_pt
    }

    /// Baseline of the first line on a fresh page.
    pub fn top(&self) -> f32 {
        self.page_height_pt - self.margin_top_pt
    }

    /// Lowest baseline a line may be drawn at.
    pub fn bottom(&self) -> f32 {
        self.margin_bottom_pt
    }

    pub fn left(&self) -> f32 {
        self.margin_left_pt
    }

    /// Vertical space taken by the document title and the `Generated:` line.
    pub fn header_height(&self) -> f32 {
        self.doc_title_line_height_pt + self.timestamp_line_height_pt
    }

    /// Rejects geometries whose content rectangle is empty or too short for
    /// the document header.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let width = self.content_width();
        let height = self.content_height();
        if width <= 0.0 || height <= 0.0 || self.line_height_pt <= 0.0 {
            return Err(LayoutError::EmptyContentArea { width, height });
        }
        let header = self.header_height();
        if height < header {
            return Err(LayoutError::HeaderDoesNotFit { header, height });
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font style, in 1/1000 em.
///
/// `widths[i]` = width of ASCII character `(i + 32)`; `extras` holds the
/// non-ASCII WinAnsi glyphs with known widths. Zero-width code points (variation
/// selectors, joiners) measure 0 and are dropped when the PDF is written.
pub struct FontMetricTable {
    widths: [u16; 95],
    extras: &'static [(char, u16)],
    /// Fallback width for anything not covered above.
    pub average_char_width: u16,
}

impl FontMetricTable {
    pub fn char_units(&self, c: char) -> u32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return u32::from(self.widths[code - 32]);
        }
        if is_zero_width(c) {
            return 0;
        }
        self.extras
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, w)| u32::from(*w))
            .unwrap_or(u32::from(self.average_char_width))
    }

    /// Width of a string in 1/1000 em. Integer so that measuring pieces and
    /// measuring the joined string always agree.
    pub fn measure_units(&self, s: &str) -> u32 {
        s.chars().map(|c| self.char_units(c)).sum()
    }

    /// Rendered width of a string in points at the given font size.
    pub fn measure_str(&self, s: &str, font_size_pt: f32) -> f32 {
        units_to_pt(self.measure_units(s), font_size_pt)
    }
}

pub fn units_to_pt(units: u32, font_size_pt: f32) -> f32 {
    units as f32 * font_size_pt / 1000.0
}

/// Code points that occupy no horizontal space (emoji presentation selectors,
/// zero-width joiner/space).
pub fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{FE00}'..='\u{FE0F}' | '\u{200B}'..='\u{200D}')
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_EXTRAS: [(char, u16); 6] = [
    ('•', 350),
    ('—', 1000),
    ('–', 556),
    ('°', 400),
    ('’', 222),
    ('…', 1000),
];

static HELVETICA_BOLD_EXTRAS: [(char, u16); 6] = [
    ('•', 350),
    ('—', 1000),
    ('–', 556),
    ('°', 400),
    ('’', 278),
    ('…', 1000),
];

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    extras: &HELVETICA_EXTRAS,
    average_char_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    extras: &HELVETICA_BOLD_EXTRAS,
    average_char_width: 611,
};

/// Returns the static metric table for a font style.
pub fn get_metrics(style: FontStyle) -> &'static FontMetricTable {
    match style {
        FontStyle::Regular => &HELVETICA_TABLE,
        FontStyle::Bold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontStyle::Regular);
        assert_eq!(metrics.measure_str("", 11.0), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(FontStyle::Regular);
        let width = metrics.measure_str(" ", 10.0);
        assert!((width - 2.78).abs() < 1e-4, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Gateway of India";
        let regular = get_metrics(FontStyle::Regular).measure_units(text);
        let bold = get_metrics(FontStyle::Bold).measure_units(text);
        assert!(bold > regular);
    }

    #[test]
    fn test_bullet_and_dash_use_known_widths() {
        let metrics = get_metrics(FontStyle::Regular);
        assert_eq!(metrics.char_units('•'), 350);
        assert_eq!(metrics.char_units('—'), 1000);
    }

    #[test]
    fn test_unknown_char_falls_back_to_average() {
        let metrics = get_metrics(FontStyle::Regular);
        assert_eq!(metrics.char_units('⚠'), 556);
    }

    #[test]
    fn test_variation_selector_is_zero_width() {
        let metrics = get_metrics(FontStyle::Regular);
        assert_eq!(metrics.measure_units("\u{FE0F}"), 0);
    }

    #[test]
    fn test_measure_units_is_additive() {
        let metrics = get_metrics(FontStyle::Regular);
        let joined = metrics.measure_units("Day 1");
        let pieces = metrics.measure_units("Day") + metrics.measure_units(" ") + metrics.measure_units("1");
        assert_eq!(joined, pieces);
    }

    // ── PageConfig ──────────────────────────────────────────────────────────

    #[test]
    fn test_default_page_is_a4_with_2cm_margins() {
        let config = default_page_config();
        assert!((config.page_width_pt - 595.2756).abs() < 0.01);
        assert!((config.page_height_pt - 841.8898).abs() < 0.01);
        assert!((config.margin_left_pt - 56.6929).abs() < 0.01);
        assert!((config.content_width() - 481.8898).abs() < 0.01);
        assert!(config.top() > config.bottom());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_content_area() {
        let mut config = default_page_config();
        config.margin_left_pt = 300.0;
        config.margin_right_pt = 300.0;
        assert!(matches!(
            config.validate(),
            Err(LayoutError::EmptyContentArea { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_content_shorter_than_header() {
        let mut config = default_page_config();
        let spare = config.content_height() - config.header_height();
        config.margin_bottom_pt += spare + 1.0;
        assert!(config.content_height() > 0.0);
        assert!(matches!(
            config.validate(),
            Err(LayoutError::HeaderDoesNotFit { .. })
        ));

        config.margin_bottom_pt -= 2.0;
        assert!(config.validate().is_ok());
    }
}
