//! Markdown heading removal for text that is drawn as plain lines.

/// `(prefix, strip_len)` pairs, longest prefix first.
const HEADING_RULES: &[(&str, usize)] = &[("### ", 4), ("## ", 3), ("# ", 2)];

/// Removes leading heading markers (`#`, `##` or `###` followed by a space)
/// until none is left, so stacked markers like `## # Day 1` are fully removed.
pub fn strip_heading(mut line: &str) -> &str {
    while let Some((_, len)) = HEADING_RULES
        .iter()
        .find(|(prefix, _)| line.starts_with(prefix))
    {
        line = &line[*len..];
    }
    line
}

/// Applies `strip_heading` to every line, keeping the line structure intact.
pub fn strip_headings(text: &str) -> String {
    text.split('\n')
        .map(strip_heading)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_each_heading_level() {
        assert_eq!(strip_heading("# Paris"), "Paris");
        assert_eq!(strip_heading("## Day 1"), "Day 1");
        assert_eq!(strip_heading("### 🌤 Weather — Paris, France"), "🌤 Weather — Paris, France");
    }

    #[test]
    fn test_hash_without_space_is_content() {
        assert_eq!(strip_heading("#1 croissant in town"), "#1 croissant in town");
        assert_eq!(strip_heading("#### deep"), "#### deep");
    }

    #[test]
    fn test_heading_marker_only_stripped_at_line_start() {
        assert_eq!(strip_heading("Dinner ## late"), "Dinner ## late");
    }

    #[test]
    fn test_stacked_markers_fully_stripped() {
        assert_eq!(strip_heading("## # nested"), "nested");
        assert_eq!(strip_heading("### ## Morning"), "Morning");
        assert_eq!(strip_heading("# ### # x"), "x");
    }

    #[test]
    fn test_strip_headings_line_by_line() {
        let md = "## Day 1\n- 9:00 AM — Louvre\n\n## Day 2\n- Lunch";
        assert_eq!(strip_headings(md), "Day 1\n- 9:00 AM — Louvre\n\nDay 2\n- Lunch");
    }

    #[test]
    fn test_strip_headings_idempotent() {
        let md = "# Trip\n## Day 1\n### Morning\n- Walk\n\n## Day 2\n- Museum";
        let once = strip_headings(md);
        assert_eq!(strip_headings(&once), once);

        let stacked = "## # Day 1\n### ## Morning\n- Walk";
        let once = strip_headings(stacked);
        assert_eq!(once, "Day 1\nMorning\n- Walk");
        assert_eq!(strip_headings(&once), once);
    }

    #[test]
    fn test_warning_placeholder_untouched() {
        let warning = "⚠️ Weather fetch failed: City not found";
        assert_eq!(strip_headings(warning), warning);
    }
}
