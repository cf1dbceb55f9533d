//! Server-rendered planner pages: the input form and the result view.

use axum::response::Html;
use pulldown_cmark::{html, Event, Parser};

use crate::itinerary::handlers::Plan;
use crate::itinerary::{MAX_DAYS, MIN_DAYS};
use crate::weather::is_weather_failure;

const WEATHER_UNAVAILABLE: &str = "Weather data could not be fetched for this city.";

const PAGE_STYLE: &str = r#"
body { background: #0c0f12; color: #e6e6e6; font-family: system-ui, sans-serif; margin: 0; }
main { max-width: 1100px; margin: 0 auto; padding: 1.8rem; }
.columns { display: grid; grid-template-columns: 58fr 42fr; gap: 1.2rem; }
.card { background: #111418; border: 1px solid #1f242b; border-radius: 14px; padding: 16px 18px; }
.small { font-size: 0.9rem; opacity: .85; }
.error { color: #ff6a3d; }
label { display: block; margin-top: .8rem; }
input, textarea { width: 100%; background: #13171c; color: inherit; border: 1px solid #2b3139; border-radius: 8px; padding: 6px; }
button { margin-top: 1rem; background: #ff6a3d; color: #fff; border: 0; border-radius: 8px; padding: 8px 16px; cursor: pointer; }
"#;

/// GET /
pub async fn handle_form_page() -> Html<String> {
    Html(render_form_page(None))
}

pub fn render_form_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!("<p class=\"error\">{}</p>", escape_html(msg)))
        .unwrap_or_default();
    let body = format!(
        r#"<h1>🗺️ Travel Itinerary Planner</h1>
<p>Plan trips for <strong>{MIN_DAYS}–{MAX_DAYS} days</strong> with live weather and a downloadable PDF itinerary.</p>
<form class="card" method="post" action="/plan">
{error_html}
<label>City <input name="city" type="text"></label>
<label>Interests (comma-separated) <textarea name="interests" rows="3"></textarea></label>
<label>Days <input name="days" type="number" min="{MIN_DAYS}" max="{MAX_DAYS}" value="{MIN_DAYS}"></label>
<button type="submit">🚀 Generate Plan</button>
</form>"#
    );
    page("Travel Itinerary Planner", &body)
}

pub fn render_result_page(plan: &Plan) -> String {
    let weather_html = if is_weather_failure(&plan.weather) {
        format!("<p>{WEATHER_UNAVAILABLE}</p>")
    } else {
        markdown_to_html(&plan.weather)
    };
    let body = format!(
        r#"<h1>🗺️ {title}</h1>
<div class="columns">
<section><h4>📅 Itinerary</h4><div class="card">{itinerary}</div></section>
<section><h4>🌤 Weather</h4><div class="card small">{weather_html}</div></section>
</div>
<form method="post" action="/plan/pdf">
<input type="hidden" name="city" value="{city}">
<input type="hidden" name="days" value="{days}">
<input type="hidden" name="interests" value="{interests}">
<textarea name="itinerary" hidden>{itinerary_raw}</textarea>
<textarea name="weather" hidden>{weather_raw}</textarea>
<button type="submit">⬇️ Download PDF ({file_name})</button>
</form>
<p><a href="/">Plan another trip</a></p>"#,
        title = escape_html(&plan.trip.document_title()),
        itinerary = markdown_to_html(&plan.itinerary),
        city = escape_html(&plan.trip.city),
        days = plan.trip.days,
        interests = escape_html(&plan.trip.interests_text()),
        // A textarea drops one leading newline, so keep the content intact with an extra one.
        itinerary_raw = format!("\n{}", escape_html(&plan.itinerary)),
        weather_raw = format!("\n{}", escape_html(&plan.weather)),
        file_name = escape_html(&plan.trip.file_name()),
    );
    page(&plan.trip.document_title(), &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{}</title><style>{PAGE_STYLE}</style></head>\
         <body><main>{body}</main></body></html>",
        escape_html(title)
    )
}

/// Renders generated markdown. Raw HTML in the source is shown as text.
fn markdown_to_html(markdown: &str) -> String {
    let events = Parser::new(markdown).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::TripRequest;

    fn plan(weather: &str) -> Plan {
        Plan {
            trip: TripRequest::new("paris", "art, food", 2).unwrap(),
            itinerary: "## Day 1\n- 9:00 AM — Louvre <script>alert(1)</script>".to_string(),
            weather: weather.to_string(),
        }
    }

    #[test]
    fn test_form_page_has_bounded_days_input() {
        let html = render_form_page(None);
        assert!(html.contains(r#"name="days" type="number" min="1" max="5""#));
        assert!(html.contains(r#"action="/plan""#));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_form_page_shows_escaped_error() {
        let html = render_form_page(Some("bad <input>"));
        assert!(html.contains("bad &lt;input&gt;"));
    }

    #[test]
    fn test_result_page_renders_markdown_and_escapes_html() {
        let html = render_result_page(&plan("### 🌤 Weather — Paris, France"));
        assert!(html.contains("<h2>Day 1</h2>"));
        assert!(html.contains("<li>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Paris — 2-Day Itinerary"));
        assert!(html.contains("itinerary_paris_2d.pdf"));
        assert!(html.contains("<h3>🌤 Weather — Paris, France</h3>"));
    }

    #[test]
    fn test_result_page_weather_failure_notice() {
        let html = render_result_page(&plan("⚠️ Weather fetch failed: City not found"));
        assert!(html.contains(WEATHER_UNAVAILABLE));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
