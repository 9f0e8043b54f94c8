//! Score result and flavor profile models

use serde::{Deserialize, Serialize};

/// Maximum ratio sub-score
pub const RATIO_SCORE_MAX: i32 = 40;
/// Maximum temperature sub-score
pub const TEMP_SCORE_MAX: i32 = 30;
/// Maximum time sub-score
pub const TIME_SCORE_MAX: i32 = 30;

/// Predicted cup profile, every attribute on a 1-10 scale
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlavorProfile {
    pub acidity: i32,
    pub sweetness: i32,
    pub body: i32,
    pub bitterness: i32,
}

/// Outcome of scoring one recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Sum of the sub-scores plus any grind penalty; not clamped
    pub total_score: i32,
    /// out of 40
    pub ratio_score: i32,
    /// out of 30
    pub temp_score: i32,
    /// out of 30
    pub time_score: i32,
    /// Overall verdict first, then ratio, temperature, time and grind notes
    pub feedback: Vec<String>,
    pub ideal_ratio: String,
    pub ideal_temp: String,
    pub ideal_time: String,
    pub calculated_ratio: f64,
    pub flavor: FlavorProfile,
}

/// Overall brew quality tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BrewQuality {
    /// 95+ points
    Excellent,
    /// 80-94 points
    Good,
    /// Below 80 points
    NeedsAdjustment,
}

impl BrewQuality {
    pub fn classify(total_score: i32) -> Self {
        if total_score >= 95 {
            BrewQuality::Excellent
        } else if total_score >= 80 {
            BrewQuality::Good
        } else {
            BrewQuality::NeedsAdjustment
        }
    }

    /// Headline feedback shown first in the result
    pub fn message(&self) -> &'static str {
        match self {
            BrewQuality::Excellent => "Luar biasa! Seduhan yang sangat ideal dan seimbang.",
            BrewQuality::Good => "Seduhan yang bagus, ada sedikit ruang untuk perbaikan.",
            BrewQuality::NeedsAdjustment => {
                "Parameter seduhan perlu disesuaikan untuk hasil yang optimal."
            }
        }
    }
}

impl std::fmt::Display for BrewQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrewQuality::Excellent => write!(f, "Excellent"),
            BrewQuality::Good => write!(f, "Good"),
            BrewQuality::NeedsAdjustment => write!(f, "Needs Adjustment"),
        }
    }
}
