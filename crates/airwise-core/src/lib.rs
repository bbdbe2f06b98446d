pub mod app_config;
pub mod category;
pub mod color;
pub mod config;
pub mod locations;
pub mod pollutant;
pub mod snapshot;

pub use app_config::{AppConfig, Environment};
pub use category::{
    aqi_gauge_percent, classify, health_implications, recommendations, AqiCategory,
};
pub use color::{color_key, ColorToken};
pub use config::{load_app_config, load_app_config_from_env};
pub use locations::{load_locations, parse_locations, LocationConfig, LocationsFile};
pub use pollutant::{normalize, Pollutant, PollutantLevel, PollutantReading};
pub use snapshot::AirQualitySnapshot;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("location not found: {0}")]
    UnknownLocation(String),

    #[error("unmapped AQI category: {0}")]
    UnmappedCategory(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read locations file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse locations file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("invalid locations file: {0}")]
    Validation(String),
}
