//! WMO weather interpretation codes as returned by Open-Meteo's `weathercode`.

/// Code → description, ascending by code.
static WMO_CODES: &[(i64, &str)] = &[
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Fog"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Freezing drizzle (light)"),
    (57, "Freezing drizzle (dense)"),
    (61, "Light rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Freezing rain (light)"),
    (67, "Freezing rain (heavy)"),
    (71, "Light snowfall"),
    (73, "Moderate snowfall"),
    (75, "Heavy snowfall"),
    (77, "Snow grains"),
    (80, "Rain showers (slight)"),
    (81, "Rain showers (moderate)"),
    (82, "Rain showers (violent)"),
    (85, "Snow showers (slight)"),
    (86, "Snow showers (heavy)"),
    (95, "Thunderstorm (slight/moderate)"),
    (96, "Thunderstorm w/ hail (slight)"),
    (99, "Thunderstorm w/ hail (heavy)"),
];

/// Shown for codes outside the table and for missing values.
pub const UNKNOWN_WEATHER: &str = "N/A";

pub fn describe(code: Option<i64>) -> &'static str {
    code.and_then(|code| {
        WMO_CODES
            .binary_search_by_key(&code, |(c, _)| *c)
            .ok()
            .map(|i| WMO_CODES[i].1)
    })
    .unwrap_or(UNKNOWN_WEATHER)
}
