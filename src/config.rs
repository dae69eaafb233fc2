//! Configuration loading
//!
//! Settings are read from a TOML file such as:
//!
//! ```toml
//! precision = 5
//!
//! [logging]
//! level = "debug"
//! file = "geokit.log"
//! ```

use std::fs;
use std::str::FromStr;
use log::{debug, LevelFilter};
use crate::coordinate::Precision;
use crate::errors::{GeoError, GeoResult};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GeokitConfig {
    /// Default precision for normalization, truncation and parsing
    pub precision: Precision,
    /// Maximum log level
    pub log_level: LevelFilter,
    /// Optional log file path
    pub log_file: Option<String>,
}

impl Default for GeokitConfig {
    fn default() -> Self {
        GeokitConfig {
            precision: Precision::default(),
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl GeokitConfig {
    /// Parse configuration from a TOML string
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = GeokitConfig::default();

        if let Some(value) = toml_value.get("precision") {
            let digits = value.as_integer()
                .ok_or_else(|| GeoError::ConfigError("'precision' must be an integer".to_string()))?;
            config.precision = Precision::new(digits)
                .map_err(|e| GeoError::ConfigError(e.to_string()))?;
        }

        if let Some(logging) = toml_value.get("logging") {
            let table = logging.as_table()
                .ok_or_else(|| GeoError::ConfigError("'logging' must be a table".to_string()))?;

            if let Some(level) = table.get("level") {
                let level = level.as_str()
                    .ok_or_else(|| GeoError::ConfigError("'logging.level' must be a string".to_string()))?;
                config.log_level = LevelFilter::from_str(level)
                    .map_err(|_| GeoError::ConfigError(format!("Unknown log level: {}", level)))?;
            }

            if let Some(file) = table.get("file") {
                let file = file.as_str()
                    .ok_or_else(|| GeoError::ConfigError("'logging.file' must be a string".to_string()))?;
                config.log_file = Some(file.to_string());
            }
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }
}
