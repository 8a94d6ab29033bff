//! Wire payloads and the render-ready data model.
//!
//! The `*Payload` types mirror the provider's JSON shapes; the rest are the
//! derived, render-ready aggregates produced by [`crate::transform`].

use serde::Deserialize;

/// Error envelope returned by the provider on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub cod: i64,
    pub message: String,
}

/// Raw current-conditions payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentPayload {
    #[serde(default)]
    pub main: MainReading,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MainReading {
    pub temp: f64,
}

/// Raw daily-forecast payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub list: Vec<DayPayload>,
}

/// One raw forecast day.
#[derive(Debug, Clone, Deserialize)]
pub struct DayPayload {
    /// Unix timestamp, seconds.
    pub dt: i64,
    pub temp: TempRange,
    /// Precipitation volume in mm; the provider omits the field on dry days.
    #[serde(default)]
    pub rain: f64,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TempRange {
    pub min: f64,
    pub max: f64,
}

/// One entry of a condition list; only the icon code matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionEntry {
    pub icon: String,
}

/// Current conditions after transformation.
#[derive(Debug, Clone)]
pub struct CurrentReading {
    pub temp: f64,
    /// The forecast entry covering today, promoted out of the forecast list
    /// when the list had more than one entry.
    pub today: Option<DayPayload>,
    pub icon: String,
}

/// One render-ready forecast day.
#[derive(Debug, Clone)]
pub struct ForecastDay {
    pub unix: i64,
    /// Full weekday name in local time, e.g. "Monday".
    pub weekday: String,
    pub temp_min: f64,
    pub temp_max: f64,
    pub rain: f64,
    pub icon: String,
}

/// The sole input to the renderer. Immutable once built.
#[derive(Debug, Clone)]
pub struct RenderModel {
    pub current: CurrentReading,
    pub forecast: Vec<ForecastDay>,
}
