use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::ColorToken;
use crate::CoreError;

/// A pollutant tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "O3")]
    O3,
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "CO")]
    Co,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::O3,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
    ];

    /// Short code as displayed, e.g. `"PM2.5"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::O3 => "O3",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
        }
    }

    #[must_use]
    pub fn full_name(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "Fine Particulate Matter (≤2.5μm)",
            Pollutant::Pm10 => "Coarse Particulate Matter (≤10μm)",
            Pollutant::O3 => "Ozone",
            Pollutant::No2 => "Nitrogen Dioxide",
            Pollutant::So2 => "Sulfur Dioxide",
            Pollutant::Co => "Carbon Monoxide",
        }
    }

    /// Concentration that fills the gauge bar, in the reading's own unit
    /// (μg/m³ for particulates, ppb for gases, ppm for CO).
    #[must_use]
    pub fn reference_ceiling(self) -> f64 {
        match self {
            Pollutant::Pm25 => 250.0,
            Pollutant::Pm10 => 430.0,
            Pollutant::O3 => 200.0,
            Pollutant::No2 => 400.0,
            Pollutant::So2 => 350.0,
            Pollutant::Co => 15.0,
        }
    }

    /// Gauge fill for `value`, clamped to `[0, 100]`. NaN reads as empty.
    #[must_use]
    pub fn gauge_percent(self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        (value / self.reference_ceiling() * 100.0).clamp(0.0, 100.0)
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Pollutant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pollutant::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown pollutant: {s}")))
    }
}

/// Gauge percentage for a pollutant given by its display code.
///
/// An unrecognized code yields `0.0`; it only affects a bar width.
#[must_use]
pub fn normalize(pollutant: &str, value: f64) -> f64 {
    pollutant
        .parse::<Pollutant>()
        .map_or(0.0, |p| p.gauge_percent(value))
}

/// Authored severity level of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PollutantLevel {
    Low,
    Moderate,
    High,
    #[serde(alias = "very high")]
    VeryHigh,
}

impl PollutantLevel {
    /// Bar color for the level.
    #[must_use]
    pub fn color_token(self) -> ColorToken {
        match self {
            PollutantLevel::Low => ColorToken::Good,
            PollutantLevel::Moderate => ColorToken::Moderate,
            PollutantLevel::High => ColorToken::Unhealthy,
            PollutantLevel::VeryHigh => ColorToken::Bad,
        }
    }
}

impl std::fmt::Display for PollutantLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollutantLevel::Low => write!(f, "low"),
            PollutantLevel::Moderate => write!(f, "moderate"),
            PollutantLevel::High => write!(f, "high"),
            PollutantLevel::VeryHigh => write!(f, "very-high"),
        }
    }
}

/// One measured concentration. `level` is authored alongside the value and
/// is not derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantReading {
    name: Pollutant,
    value: f64,
    unit: String,
    level: PollutantLevel,
}

impl PollutantReading {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] if `value` is negative or not finite.
    pub fn new(
        name: Pollutant,
        value: f64,
        unit: impl Into<String>,
        level: PollutantLevel,
    ) -> Result<Self, CoreError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "{name} reading must be a non-negative number, got {value}"
            )));
        }
        Ok(Self {
            name,
            value,
            unit: unit.into(),
            level,
        })
    }

    #[must_use]
    pub fn name(&self) -> Pollutant {
        self.name
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn level(&self) -> PollutantLevel {
        self.level
    }

    #[must_use]
    pub fn gauge_percent(&self) -> f64 {
        self.name.gauge_percent(self.value)
    }
}
