//! AQI severity buckets and the advisory text attached to each one.
//!
//! Every lookup here is an exhaustive `match` over [`AqiCategory`]; adding a
//! seventh category will not compile until each table is extended.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Upper end of the AQI scale drawn by the dashboard gauge.
pub const AQI_GAUGE_MAX: u32 = 500;

/// One of six AQI severity buckets, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// All categories in ascending severity.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthySensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Bucket a non-negative AQI. Upper bounds are inclusive.
    #[must_use]
    pub fn from_aqi(aqi: u32) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthySensitive,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    /// Kebab-case slug, e.g. `"unhealthy-sensitive"`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            AqiCategory::Good => "good",
            AqiCategory::Moderate => "moderate",
            AqiCategory::UnhealthySensitive => "unhealthy-sensitive",
            AqiCategory::Unhealthy => "unhealthy",
            AqiCategory::VeryUnhealthy => "very-unhealthy",
            AqiCategory::Hazardous => "hazardous",
        }
    }

    /// Human-readable badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Bar color used by the admin comparison chart.
    #[must_use]
    pub fn chart_hex(self) -> &'static str {
        match self {
            AqiCategory::Good => "#22C55E",
            AqiCategory::Moderate => "#FACC15",
            AqiCategory::UnhealthySensitive => "#FB923C",
            AqiCategory::Unhealthy => "#EF4444",
            AqiCategory::VeryUnhealthy => "#9F1239",
            AqiCategory::Hazardous => "#7F1D1D",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.slug())
    }
}

impl FromStr for AqiCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AqiCategory::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| CoreError::UnmappedCategory(s.to_string()))
    }
}

/// Classify a signed AQI reading.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] when `aqi` is negative.
pub fn classify(aqi: i64) -> Result<AqiCategory, CoreError> {
    if aqi < 0 {
        return Err(CoreError::InvalidInput(format!(
            "AQI must be non-negative, got {aqi}"
        )));
    }
    // Anything past `u32::MAX` is well inside the hazardous bucket.
    let aqi = u32::try_from(aqi).unwrap_or(u32::MAX);
    Ok(AqiCategory::from_aqi(aqi))
}

/// Canonical health-implication sentence for a category.
#[must_use]
pub fn health_implications(category: AqiCategory) -> &'static str {
    match category {
        AqiCategory::Good => {
            "Air quality is considered satisfactory, and air pollution poses little or no risk."
        }
        AqiCategory::Moderate => {
            "Air quality is acceptable; however, there may be a moderate health concern for a very small number of people."
        }
        AqiCategory::UnhealthySensitive => {
            "Members of sensitive groups may experience health effects. The general public is not likely to be affected."
        }
        AqiCategory::Unhealthy => {
            "Everyone may begin to experience health effects; members of sensitive groups may experience more serious health effects."
        }
        AqiCategory::VeryUnhealthy => {
            "Health warnings of emergency conditions. The entire population is more likely to be affected."
        }
        AqiCategory::Hazardous => {
            "Health alert: everyone may experience more serious health effects."
        }
    }
}

/// Canonical recommended-action sentence for a category.
#[must_use]
pub fn recommendations(category: AqiCategory) -> &'static str {
    match category {
        AqiCategory::Good => "Enjoy outdoor activities and open windows to circulate fresh air.",
        AqiCategory::Moderate => {
            "Consider limiting prolonged outdoor exertion if you are sensitive to air pollution."
        }
        AqiCategory::UnhealthySensitive => {
            "People with respiratory or heart disease, the elderly and children should limit prolonged outdoor exertion."
        }
        AqiCategory::Unhealthy => {
            "Avoid prolonged or heavy outdoor exertion. Move activities indoors or reschedule to a time when the air quality is better."
        }
        AqiCategory::VeryUnhealthy => {
            "Everyone should avoid all outdoor physical activity. Stay indoors, close windows and use purifiers if available."
        }
        AqiCategory::Hazardous => {
            "Remain indoors and keep activity levels low. Seal windows and doors. Use air purifiers if available."
        }
    }
}

/// Fill level of the AQI gauge as a percentage of [`AQI_GAUGE_MAX`], capped at 100.
#[must_use]
pub fn aqi_gauge_percent(aqi: u32) -> f64 {
    (f64::from(aqi) / f64::from(AQI_GAUGE_MAX) * 100.0).min(100.0)
}
