//! Markup rendering for the widget's mount point.

use std::fmt::Write;

use crate::{error::WidgetError, model::RenderModel};

/// Base widget stylesheet, handed to the host once at setup.
pub const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Weather icon stylesheet, handed to the host once at setup.
pub const ICON_CSS: &str = include_str!("../assets/wu-icons-style.css");

/// Renders a [`RenderModel`] into the widget markup.
///
/// Rendering is pure and deterministic: the same model always produces
/// byte-identical markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, model: &RenderModel) -> Result<String, WidgetError> {
        let mut out = String::new();

        writeln!(out, r#"<div class="weather">"#)?;
        writeln!(out, r#"  <div class="current">"#)?;
        writeln!(out, r#"    <span class="icon {}"></span>"#, model.current.icon)?;
        writeln!(out, r#"    <span class="temp">{:.0}&deg;</span>"#, model.current.temp)?;
        if let Some(today) = &model.current.today {
            writeln!(
                out,
                r#"    <span class="range">{:.0}&deg; / {:.0}&deg;</span>"#,
                today.temp.min, today.temp.max,
            )?;
        }
        writeln!(out, "  </div>")?;

        writeln!(out, r#"  <ul class="forecast">"#)?;
        for day in &model.forecast {
            writeln!(out, "    <li>")?;
            writeln!(out, r#"      <span class="day">{}</span>"#, day.weekday)?;
            writeln!(out, r#"      <span class="icon {}"></span>"#, day.icon)?;
            writeln!(out, r#"      <span class="min">{:.0}&deg;</span>"#, day.temp_min)?;
            writeln!(out, r#"      <span class="max">{:.0}&deg;</span>"#, day.temp_max)?;
            if day.rain > 0.0 {
                writeln!(out, r#"      <span class="rain">{:.1} mm</span>"#, day.rain)?;
            }
            writeln!(out, "    </li>")?;
        }
        writeln!(out, "  </ul>")?;
        write!(out, "</div>")?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentPayload, ForecastPayload};
    use crate::transform::transform;

    fn empty_model() -> RenderModel {
        transform(CurrentPayload::default(), ForecastPayload::default())
    }

    #[test]
    fn empty_model_renders_non_empty_markup() {
        let markup = Renderer::new().render(&empty_model()).expect("render should succeed");

        assert!(!markup.is_empty());
        assert!(markup.contains(r#"<div class="weather">"#));
        assert!(markup.contains("wu-unknown"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let model = empty_model();
        let renderer = Renderer::new();

        let first = renderer.render(&model).expect("render should succeed");
        let second = renderer.render(&model).expect("render should succeed");

        assert_eq!(first, second);
    }

    #[test]
    fn forecast_days_render_labels_and_icons() {
        let forecast: ForecastPayload = serde_json::from_str(
            r#"{"list":[
                {"dt":1700000000,"temp":{"min":1.0,"max":5.0},"weather":[{"icon":"01d"}]},
                {"dt":1700086400,"temp":{"min":2.0,"max":6.0},"rain":3.4,"weather":[{"icon":"10d"}]},
                {"dt":1700172800,"temp":{"min":0.0,"max":4.0},"weather":[{"icon":"13d"}]}
            ]}"#,
        )
        .expect("payload should decode");

        let model = transform(CurrentPayload::default(), forecast);
        let markup = Renderer::new().render(&model).expect("render should succeed");

        assert!(markup.contains("wu-rain"));
        assert!(markup.contains("wu-snow"));
        assert!(markup.contains("3.4 mm"));
        // Today's range comes from the promoted head entry.
        assert!(markup.contains(r#"<span class="range">1&deg; / 5&deg;</span>"#));
    }

    #[test]
    fn dry_days_render_no_rain_volume() {
        let forecast: ForecastPayload = serde_json::from_str(
            r#"{"list":[
                {"dt":1700000000,"temp":{"min":1.0,"max":5.0},"weather":[{"icon":"01d"}]},
                {"dt":1700086400,"temp":{"min":2.0,"max":6.0},"weather":[{"icon":"01d"}]}
            ]}"#,
        )
        .expect("payload should decode");

        let model = transform(CurrentPayload::default(), forecast);
        let markup = Renderer::new().render(&model).expect("render should succeed");

        assert!(!markup.contains("mm"));
    }

    #[test]
    fn embedded_stylesheets_are_present() {
        assert!(STYLE_CSS.contains(".weather"));
        assert!(ICON_CSS.contains("wu-unknown"));
    }
}
