//! Turns raw payloads into the render-ready model.

use chrono::{Local, LocalResult, TimeZone};

use crate::{
    icons::resolve_icon,
    model::{
        ConditionEntry, CurrentPayload, CurrentReading, DayPayload, ForecastDay, ForecastPayload,
        RenderModel,
    },
};

/// Build the render model from whatever the fetch stage produced.
///
/// When the forecast list has more than one entry, its head covers today and
/// is promoted into the current reading; the remaining days become the
/// forecast series. Shorter lists are left untouched rather than padded.
/// This step never fails: malformed input degrades to the unknown icon.
pub fn transform(current: CurrentPayload, forecast: ForecastPayload) -> RenderModel {
    let mut days = forecast.list;
    let today = if days.len() > 1 { Some(days.remove(0)) } else { None };

    let current = CurrentReading {
        temp: current.main.temp,
        icon: icon_for(&current.weather).to_string(),
        today,
    };

    let forecast = days.into_iter().map(annotate_day).collect();

    RenderModel { current, forecast }
}

fn annotate_day(day: DayPayload) -> ForecastDay {
    ForecastDay {
        unix: day.dt,
        weekday: weekday_label(day.dt),
        temp_min: day.temp.min,
        temp_max: day.temp.max,
        rain: day.rain,
        icon: icon_for(&day.weather).to_string(),
    }
}

fn icon_for(conditions: &[ConditionEntry]) -> &'static str {
    resolve_icon(conditions.first().map(|entry| entry.icon.as_str()).unwrap_or(""))
}

/// Full weekday name of a unix timestamp in local time, e.g. "Monday".
pub fn weekday_label(unix: i64) -> String {
    match Local.timestamp_opt(unix, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.format("%A").to_string(),
        LocalResult::None => String::new(),
    }
}
