use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::{Config, Units},
    error::WidgetError,
    model::{ApiErrorBody, CurrentPayload, ForecastPayload},
};

use super::WeatherSource;

const API_BASE: &str = "https://api.openweathermap.org/data/2.5/";
const CURRENT_PATH: &str = "weather";
const FORECAST_PATH: &str = "forecast/daily";

/// Number of days requested from the daily forecast endpoint.
const FORECAST_DAYS: &str = "4";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeatherMap current-conditions and daily-forecast
/// endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    location_id: String,
    app_id: String,
    units: Units,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(cfg: &Config) -> Result<Self, WidgetError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| WidgetError::Setup(format!("could not build http client: {err}")))?;

        Ok(Self {
            location_id: cfg.location_id.clone(),
            app_id: cfg.app_id.clone(),
            units: cfg.units,
            http,
        })
    }

    fn base_query(&self) -> Vec<(String, String)> {
        vec![
            ("id".to_string(), self.location_id.clone()),
            ("appid".to_string(), self.app_id.clone()),
            ("units".to_string(), self.units.as_str().to_string()),
        ]
    }

    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<T, WidgetError> {
        let url = format!("{API_BASE}{path}");
        let query = merge_query(self.base_query(), extra);

        let res = self.http.get(&url).query(&query).send().await?;
        let status = res.status();

        // Read the whole body before deciding anything, so the connection is
        // drained and reusable on every path, including errors.
        let body = res.bytes().await?;

        decode_response(status, &body)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self) -> Result<CurrentPayload, WidgetError> {
        self.request(CURRENT_PATH, &[]).await
    }

    async fn forecast(&self) -> Result<ForecastPayload, WidgetError> {
        self.request(FORECAST_PATH, &[("cnt", FORECAST_DAYS)]).await
    }
}

/// Merge call-specific parameters into the base query, last-write-wins on
/// key collision.
fn merge_query(mut base: Vec<(String, String)>, extra: &[(&str, &str)]) -> Vec<(String, String)> {
    for (key, value) in extra {
        match base.iter_mut().find(|entry| entry.0 == *key) {
            Some(entry) => entry.1 = (*value).to_string(),
            None => base.push(((*key).to_string(), (*value).to_string())),
        }
    }
    base
}

/// Decode a response body according to its status.
///
/// Success statuses decode as the expected payload. Non-success statuses
/// decode as the provider's error envelope and surface as
/// [`WidgetError::Api`]; an undecodable envelope is a
/// [`WidgetError::Decode`].
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, WidgetError> {
    if !status.is_success() {
        return match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(envelope) => Err(WidgetError::Api { code: envelope.cod, message: envelope.message }),
            Err(err) => Err(WidgetError::Decode(err)),
        };
    }

    serde_json::from_slice(body).map_err(WidgetError::Decode)
}
