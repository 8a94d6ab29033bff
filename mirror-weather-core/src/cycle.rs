//! The periodic fetch-transform-render cycle.

use crate::{
    config::Config,
    model::{CurrentPayload, ForecastPayload},
    render::{ICON_CSS, Renderer, STYLE_CSS},
    source::WeatherSource,
    transform::transform,
};

/// Host-owned display surface.
///
/// `set_content` replaces the whole surface; there is no incremental
/// patching.
pub trait MountPoint {
    fn load_css(&mut self, css: &str);

    fn set_content(&mut self, markup: &str);
}

/// Owns one mount point and drives the fetch-transform-render cycle on it.
///
/// A failing stage never aborts a pass: fetch errors degrade to empty
/// payloads, render errors leave the previously mounted markup in place.
pub struct Widget<M> {
    cfg: Config,
    source: Box<dyn WeatherSource>,
    renderer: Renderer,
    mount: M,
}

impl<M: MountPoint> Widget<M> {
    pub fn new(cfg: Config, source: Box<dyn WeatherSource>, mount: M) -> Self {
        Self { cfg, source, renderer: Renderer::new(), mount }
    }

    /// Hand the stylesheets to the host and put an empty-state render on the
    /// mount so it is valid before the first tick.
    pub fn setup(&mut self) {
        self.mount.load_css(STYLE_CSS);
        self.mount.load_css(ICON_CSS);

        self.apply(CurrentPayload::default(), ForecastPayload::default());
    }

    /// One complete pass. The two fetches run concurrently; results are
    /// combined only after both complete.
    pub async fn run_cycle(&mut self) {
        let (current, forecast) = tokio::join!(self.source.current(), self.source.forecast());

        let current = current.unwrap_or_else(|err| {
            log::error!("could not fetch current conditions: {err}");
            CurrentPayload::default()
        });
        let forecast = forecast.unwrap_or_else(|err| {
            log::error!("could not fetch daily forecast: {err}");
            ForecastPayload::default()
        });

        self.apply(current, forecast);
    }

    /// Run forever: setup, then one pass per tick at the configured
    /// interval. Passes are strictly sequential; a slow pass delays the next
    /// tick's servicing rather than overlapping it.
    pub async fn run(mut self) {
        self.setup();

        let mut tick = tokio::time::interval(self.cfg.interval());
        loop {
            tick.tick().await;
            self.run_cycle().await;
        }
    }

    fn apply(&mut self, current: CurrentPayload, forecast: ForecastPayload) {
        let model = transform(current, forecast);
        match self.renderer.render(&model) {
            Ok(markup) => self.mount.set_content(&markup),
            Err(err) => log::error!("could not render weather data: {err}"),
        }
    }
}
