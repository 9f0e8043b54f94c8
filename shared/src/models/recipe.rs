//! Brew recipe models

use serde::{Deserialize, Deserializer, Serialize};

/// A brew recipe as submitted by the user
///
/// Every field falls back to its zero value when missing from the payload
/// or sent as `null`, so a partially filled form still decodes and gets scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Recipe {
    /// e.g. "v60", "espresso", "aeropress"
    #[serde(deserialize_with = "null_as_default")]
    pub method: String,
    /// grams
    #[serde(deserialize_with = "null_as_default")]
    pub coffee_dose: f64,
    /// grams
    #[serde(deserialize_with = "null_as_default")]
    pub water_yield: f64,
    /// Celsius
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    /// seconds
    #[serde(deserialize_with = "null_as_default")]
    pub brew_time: i64,
    /// "fine", "medium-fine", "medium", "medium-coarse", "coarse"
    #[serde(deserialize_with = "null_as_default")]
    pub grind_size: String,
    /// "light", "medium", "dark"
    #[serde(deserialize_with = "null_as_default")]
    pub roast_level: String,
}

/// Blank number inputs arrive as `null`; treat them like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Recipe {
    /// Brew method this recipe is scored against
    pub fn brew_method(&self) -> BrewMethod {
        BrewMethod::from_tag(&self.method)
    }

    /// Only the exact "coarse" label counts as a coarse grind
    pub fn is_coarse_grind(&self) -> bool {
        self.grind_size == "coarse"
    }
}

/// Supported brew methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrewMethod {
    Espresso,
    Pourover,
    Aeropress,
    FrenchPress,
    ColdBrew,
}

impl BrewMethod {
    /// Resolve a method tag from the wire format
    ///
    /// Unknown or empty tags fall back to pourover, the most common method.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "espresso" => BrewMethod::Espresso,
            "v60" | "pourover" => BrewMethod::Pourover,
            "aeropress" => BrewMethod::Aeropress,
            "frenchpress" => BrewMethod::FrenchPress,
            "coldbrew" => BrewMethod::ColdBrew,
            _ => BrewMethod::Pourover,
        }
    }

    /// Reference brew time used by the flavor predictor
    pub fn target_time_seconds(&self) -> i64 {
        match self {
            BrewMethod::Espresso => 30,
            BrewMethod::FrenchPress => 270,
            BrewMethod::ColdBrew => 64_800,
            BrewMethod::Pourover | BrewMethod::Aeropress => 180,
        }
    }
}

/// Ideal pourover water temperature for a roast level
///
/// Lighter roasts need hotter water, darker roasts cooler.
pub fn pourover_target_temp(roast_level: &str) -> f64 {
    match roast_level {
        "light" => 95.0,
        "dark" => 88.0,
        _ => 93.0,
    }
}
