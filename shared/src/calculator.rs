//! Brew helpers: water calculator and shareable recipe card

use thiserror::Error;

use crate::models::Recipe;
use crate::validation::{
    validate_dose, validate_target_ratio, INVALID_RATIO_MESSAGE, ZERO_DOSE_MESSAGE,
};

/// Calculator input errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalculatorError {
    #[error("Coffee dose must be greater than 0g, got {0}")]
    InvalidDose(f64),

    #[error("Target ratio must be a positive number, got {0}")]
    InvalidRatio(f64),
}

impl CalculatorError {
    /// Indonesian message for display next to the form
    pub fn message_id(&self) -> &'static str {
        match self {
            CalculatorError::InvalidDose(_) => ZERO_DOSE_MESSAGE,
            CalculatorError::InvalidRatio(_) => INVALID_RATIO_MESSAGE,
        }
    }
}

/// Grams of water needed to brew `dose` grams of coffee at 1:`target_ratio`
///
/// Rounded to the nearest whole gram, which is what a kitchen scale shows.
pub fn water_for_ratio(dose: f64, target_ratio: f64) -> Result<f64, CalculatorError> {
    if !dose.is_finite() || validate_dose(dose).is_err() {
        return Err(CalculatorError::InvalidDose(dose));
    }
    validate_target_ratio(target_ratio).map_err(|_| CalculatorError::InvalidRatio(target_ratio))?;

    Ok((dose * target_ratio).round())
}

/// Plain-text recipe summary for sharing
pub fn recipe_card(recipe: &Recipe, total_score: i32) -> String {
    format!(
        "Celestial Brew Recipe ☕✨\n\
         Method: {}\n\
         Coffee: {}g\n\
         Water: {}g\n\
         Temp: {}°C\n\
         Time: {}s\n\
         Score: {}/100",
        recipe.method.to_uppercase(),
        recipe.coffee_dose,
        recipe.water_yield,
        recipe.temperature,
        recipe.brew_time,
        total_score
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_for_ratio() {
        assert_eq!(water_for_ratio(15.0, 16.0), Ok(240.0));
        assert_eq!(water_for_ratio(18.0, 2.0), Ok(36.0));
        // 12.5 * 15.5 = 193.75
        assert_eq!(water_for_ratio(12.5, 15.5), Ok(194.0));
    }

    #[test]
    fn test_water_for_ratio_rejects_bad_dose() {
        assert_eq!(
            water_for_ratio(0.0, 16.0),
            Err(CalculatorError::InvalidDose(0.0))
        );
        assert!(water_for_ratio(f64::INFINITY, 16.0).is_err());
    }

    #[test]
    fn test_water_for_ratio_rejects_bad_ratio() {
        assert_eq!(
            water_for_ratio(15.0, -1.0),
            Err(CalculatorError::InvalidRatio(-1.0))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CalculatorError::InvalidDose(0.0);
        assert_eq!(err.message_id(), "Dose kopi harus lebih dari 0g.");
        assert_eq!(
            err.to_string(),
            "Coffee dose must be greater than 0g, got 0"
        );
    }

    #[test]
    fn test_recipe_card() {
        let recipe = Recipe {
            method: "v60".to_string(),
            coffee_dose: 15.0,
            water_yield: 250.0,
            temperature: 93.5,
            brew_time: 180,
            ..Default::default()
        };
        let card = recipe_card(&recipe, 92);
        assert_eq!(
            card,
            "Celestial Brew Recipe ☕✨\nMethod: V60\nCoffee: 15g\nWater: 250g\nTemp: 93.5°C\nTime: 180s\nScore: 92/100"
        );
    }
}
