use async_trait::async_trait;

use crate::{
    error::WidgetError,
    model::{CurrentPayload, ForecastPayload},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Upstream weather data for one refresh cycle.
///
/// The cycle controller only talks to this trait, which keeps it testable
/// with scripted results instead of a live endpoint.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self) -> Result<CurrentPayload, WidgetError>;

    async fn forecast(&self) -> Result<ForecastPayload, WidgetError>;
}
