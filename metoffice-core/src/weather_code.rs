//! DataPoint significant weather codes.
//!
//! Day/night variants of showers share one description, and code 4 is
//! reserved by the Met Office.

/// Translate a weather type code ("0".."30" or "N/A") into readable text.
///
/// Anything outside the table yields `"N/A"`.
pub fn describe(code: &str) -> &'static str {
    match code {
        "N/A" => "Not available",
        "0" => "Clear night",
        "1" => "Sunny day",
        "2" | "3" => "Partly cloudy",
        "4" => "Not used",
        "5" => "Mist",
        "6" => "Fog",
        "7" => "Cloudy",
        "8" => "Overcast",
        "9" | "10" => "Light rain shower",
        "11" => "Drizzle",
        "12" => "Light rain",
        "13" | "14" => "Heavy rain shower",
        "15" => "Heavy rain",
        "16" | "17" => "Sleet shower",
        "18" => "Sleet",
        "19" | "20" => "Hail shower",
        "21" => "Hail",
        "22" | "23" => "Light snow shower",
        "24" => "Light snow",
        "25" | "26" => "Heavy snow shower",
        "27" => "Heavy snow",
        "28" | "29" => "Thunder snow",
        "30" => "Thunder",
        _ => "N/A",
    }
}
