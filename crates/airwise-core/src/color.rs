use serde::{Deserialize, Serialize};

use crate::category::AqiCategory;

/// Visual severity key understood by the display layer.
///
/// The token names do not line up with [`AqiCategory`] names: the
/// sensitive-groups bucket renders as `unhealthy` and the `unhealthy`
/// bucket renders as `bad`. Keep [`color_key`] as an explicit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    Good,
    Moderate,
    Unhealthy,
    Bad,
    VeryBad,
    Hazardous,
}

impl ColorToken {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::Good => "good",
            ColorToken::Moderate => "moderate",
            ColorToken::Unhealthy => "unhealthy",
            ColorToken::Bad => "bad",
            ColorToken::VeryBad => "veryBad",
            ColorToken::Hazardous => "hazardous",
        }
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Map a category to its display token.
#[must_use]
pub fn color_key(category: AqiCategory) -> ColorToken {
    match category {
        AqiCategory::Good => ColorToken::Good,
        AqiCategory::Moderate => ColorToken::Moderate,
        AqiCategory::UnhealthySensitive => ColorToken::Unhealthy,
        AqiCategory::Unhealthy => ColorToken::Bad,
        AqiCategory::VeryUnhealthy => ColorToken::VeryBad,
        AqiCategory::Hazardous => ColorToken::Hazardous,
    }
}
