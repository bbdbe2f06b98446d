//! YAML seed file describing monitored locations.
//!
//! The file carries raw readings only. Category and advice text are always
//! derived from `aqi` when snapshots are built, so the file cannot introduce
//! an inconsistent category.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::pollutant::{Pollutant, PollutantLevel};
use crate::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct PollutantConfig {
    pub name: Pollutant,
    pub value: f64,
    pub unit: String,
    pub level: PollutantLevel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub aqi: u32,
    pub main_pollutant: String,
    #[serde(default)]
    pub pollutants: Vec<PollutantConfig>,
}

#[derive(Debug, Deserialize)]
pub struct LocationsFile {
    pub locations: Vec<LocationConfig>,
}

/// Load and validate the locations seed from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_locations(path: &Path) -> Result<LocationsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_locations(&content)
}

/// Parse and validate a locations seed from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the text cannot be parsed or fails validation.
pub fn parse_locations(content: &str) -> Result<LocationsFile, ConfigError> {
    let locations_file: LocationsFile =
        serde_yaml::from_str(content).map_err(ConfigError::CatalogFileParse)?;

    validate_locations(&locations_file)?;

    Ok(locations_file)
}

fn validate_locations(locations_file: &LocationsFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for location in &locations_file.locations {
        if location.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "location name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(location.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate location name: '{}'",
                location.name
            )));
        }

        let mut seen_pollutants = HashSet::new();
        for reading in &location.pollutants {
            if !reading.value.is_finite() || reading.value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "location '{}' has invalid {} value {}",
                    location.name, reading.name, reading.value
                )));
            }
            if !seen_pollutants.insert(reading.name) {
                return Err(ConfigError::Validation(format!(
                    "location '{}' lists {} more than once",
                    location.name, reading.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "locations_test.rs"]
mod tests;
