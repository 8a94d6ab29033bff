use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Unit system requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = WidgetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(WidgetError::Setup(format!(
                "unknown unit system '{value}'; supported: metric, imperial"
            ))),
        }
    }
}

/// Widget configuration, immutable after load.
///
/// Example TOML:
/// ```toml
/// locationId = "2172797"
/// appId = "YOUR-API-KEY"
/// units = "metric"
/// intervalSecs = 1800
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Provider location identifier.
    pub location_id: String,

    /// API key; treated as a secret and never logged.
    pub app_id: String,

    pub units: Units,

    /// Refresh interval in seconds.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    30 * 60
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    /// Reject configurations the widget cannot start with.
    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.location_id.trim().is_empty() {
            return Err(WidgetError::Setup("locationId must not be empty".to_string()));
        }
        if self.app_id.trim().is_empty() {
            return Err(WidgetError::Setup("appId must not be empty".to_string()));
        }
        if self.interval_secs == 0 {
            return Err(WidgetError::Setup("intervalSecs must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Load config from the platform config directory.
    pub fn load() -> Result<Self, WidgetError> {
        let path = Self::config_file_path()?;
        Self::load_from_path(&path)
    }

    /// Load config from an explicit path.
    pub fn load_from_path(path: &Path) -> Result<Self, WidgetError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            WidgetError::Setup(format!("failed to read config file {}: {err}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|err| {
            WidgetError::Setup(format!("failed to parse config file {}: {err}", path.display()))
        })
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf, WidgetError> {
        let dirs = ProjectDirs::from("dev", "mirror-weather", "mirror-weather").ok_or_else(
            || WidgetError::Setup("could not determine platform config directory".to_string()),
        )?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let cfg: Config = toml::from_str(
            r#"
            locationId = "2172797"
            appId = "SECRET"
            units = "imperial"
            intervalSecs = 600
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.location_id, "2172797");
        assert_eq!(cfg.app_id, "SECRET");
        assert_eq!(cfg.units, Units::Imperial);
        assert_eq!(cfg.interval(), Duration::from_secs(600));
        cfg.validate().expect("config should be valid");
    }

    #[test]
    fn interval_defaults_to_thirty_minutes() {
        let cfg: Config = toml::from_str(
            r#"
            locationId = "2172797"
            appId = "SECRET"
            units = "metric"
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.interval(), Duration::from_secs(30 * 60));
    }

    #[test]
    fn rejects_unknown_units() {
        let res: Result<Config, _> = toml::from_str(
            r#"
            locationId = "2172797"
            appId = "SECRET"
            units = "kelvin"
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn validate_rejects_empty_location_and_key() {
        let cfg = Config {
            location_id: String::new(),
            app_id: "SECRET".to_string(),
            units: Units::Metric,
            interval_secs: 1800,
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("locationId"));

        let cfg = Config { location_id: "2172797".to_string(), app_id: "  ".to_string(), ..cfg };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("appId"));
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let cfg = Config {
            location_id: "2172797".to_string(),
            app_id: "SECRET".to_string(),
            units: Units::Metric,
            interval_secs: 0,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn units_as_str_roundtrip() {
        for units in [Units::Metric, Units::Imperial] {
            let parsed = Units::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(units, parsed);
        }
    }

    #[test]
    fn unknown_units_string_errors() {
        let err = Units::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("unknown unit system"));
    }
}
