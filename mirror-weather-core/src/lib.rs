//! Core library for the mirror weather widget.
//!
//! This crate defines:
//! - Widget configuration (location, credentials, units, refresh interval)
//! - The OpenWeatherMap client and its payload models
//! - Transformation of raw payloads into render-ready data
//! - Markup rendering and the periodic update cycle
//!
//! It is used by `mirror-weather-host`, but can be embedded into other
//! dashboard hosts that provide their own mount point.

pub mod config;
pub mod cycle;
pub mod error;
pub mod icons;
pub mod model;
pub mod render;
pub mod source;
pub mod transform;

pub use config::{Config, Units};
pub use cycle::{MountPoint, Widget};
pub use error::WidgetError;
pub use model::{CurrentPayload, ForecastPayload, RenderModel};
pub use render::Renderer;
pub use source::{OpenWeatherClient, WeatherSource};
