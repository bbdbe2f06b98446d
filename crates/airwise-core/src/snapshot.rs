use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::category::{health_implications, recommendations, AqiCategory};
use crate::color::{color_key, ColorToken};
use crate::pollutant::PollutantReading;
use crate::CoreError;

/// The complete air-quality record for one location at one instant.
///
/// `category`, `health_implications` and `recommendations` are derived from
/// `aqi` in [`AirQualitySnapshot::new`] and cannot be set independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySnapshot {
    aqi: u32,
    location: String,
    timestamp: DateTime<Utc>,
    main_pollutant: String,
    pollutants: Vec<PollutantReading>,
    category: AqiCategory,
    health_implications: &'static str,
    recommendations: &'static str,
}

impl AirQualitySnapshot {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `location` is blank.
    pub fn new(
        location: impl Into<String>,
        aqi: u32,
        timestamp: DateTime<Utc>,
        main_pollutant: impl Into<String>,
        pollutants: Vec<PollutantReading>,
    ) -> Result<Self, CoreError> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "location name must be non-empty".to_string(),
            ));
        }

        let category = AqiCategory::from_aqi(aqi);
        Ok(Self {
            aqi,
            location,
            timestamp,
            main_pollutant: main_pollutant.into(),
            pollutants,
            category,
            health_implications: health_implications(category),
            recommendations: recommendations(category),
        })
    }

    /// A copy of this snapshot observed at `timestamp`.
    #[must_use]
    pub fn restamped(&self, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn aqi(&self) -> u32 {
        self.aqi
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// City part of the location, i.e. the text before the first comma.
    #[must_use]
    pub fn city(&self) -> &str {
        self.location
            .split(',')
            .next()
            .unwrap_or(&self.location)
            .trim()
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn main_pollutant(&self) -> &str {
        &self.main_pollutant
    }

    #[must_use]
    pub fn pollutants(&self) -> &[PollutantReading] {
        &self.pollutants
    }

    #[must_use]
    pub fn is_main_pollutant(&self, reading: &PollutantReading) -> bool {
        reading.name().code() == self.main_pollutant
    }

    #[must_use]
    pub fn category(&self) -> AqiCategory {
        self.category
    }

    #[must_use]
    pub fn color_key(&self) -> ColorToken {
        color_key(self.category)
    }

    #[must_use]
    pub fn health_implications(&self) -> &'static str {
        self.health_implications
    }

    #[must_use]
    pub fn recommendations(&self) -> &'static str {
        self.recommendations
    }
}
