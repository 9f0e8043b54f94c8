//! Validation utilities for brew recipes
//!
//! Error messages are in Indonesian since they are shown to the user as-is.

/// Feedback returned when the dose cannot produce a ratio
pub const ZERO_DOSE_MESSAGE: &str = "Dose kopi harus lebih dari 0g.";

/// Feedback returned when a target ratio is unusable
pub const INVALID_RATIO_MESSAGE: &str = "Rasio target harus lebih dari 0.";

// ============================================================================
// Recipe Validations
// ============================================================================

/// Validate that the coffee dose is positive
pub fn validate_dose(dose: f64) -> Result<(), &'static str> {
    // NaN fails the comparison too
    if dose > 0.0 {
        Ok(())
    } else {
        Err(ZERO_DOSE_MESSAGE)
    }
}

/// Validate a target water-to-coffee ratio (the N in 1:N)
pub fn validate_target_ratio(ratio: f64) -> Result<(), &'static str> {
    if ratio > 0.0 && ratio.is_finite() {
        Ok(())
    } else {
        Err(INVALID_RATIO_MESSAGE)
    }
}

/// Closed-interval check used by the method evaluators
pub fn is_in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}
