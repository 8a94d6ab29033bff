//! Mapping from OpenWeatherMap condition codes to CSS icon classes.

/// Class rendered for conditions the table does not cover.
pub const UNKNOWN_ICON: &str = "wu-unknown";

/// Resolve a provider condition code (two digits plus a `d`/`n` day/night
/// suffix) to its icon class. Night variants carry an extra `wu-night`
/// token. Unmapped or empty codes resolve to [`UNKNOWN_ICON`].
pub fn resolve_icon(code: &str) -> &'static str {
    match code {
        "01d" => "wu-clear",
        "02d" => "wu-partlycloudy",
        "03d" => "wu-cloudy",
        "04d" => "wu-cloudy",
        "09d" => "wu-flurries",
        "10d" => "wu-rain",
        "11d" => "wu-tstorms",
        "13d" => "wu-snow",
        "50d" => "wu-fog",
        "01n" => "wu-clear wu-night",
        "02n" => "wu-partlycloudy wu-night",
        "03n" => "wu-cloudy wu-night",
        "04n" => "wu-cloudy wu-night",
        "09n" => "wu-flurries wu-night",
        "10n" => "wu-rain wu-night",
        "11n" => "wu-tstorms wu-night",
        "13n" => "wu-snow wu-night",
        "50n" => "wu-fog wu-night",
        _ => UNKNOWN_ICON,
    }
}
