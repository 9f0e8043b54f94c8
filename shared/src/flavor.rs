//! Flavor prediction heuristic
//!
//! Starts every attribute at 5, nudges it by temperature, ratio and time,
//! and clamps to the 1-10 scale once at the end.

use crate::models::{BrewMethod, FlavorProfile, Recipe};

const BASELINE: i32 = 5;
const MIN_ATTRIBUTE: i32 = 1;
const MAX_ATTRIBUTE: i32 = 10;

/// Predict the cup profile for a recipe brewed at `ratio`
pub fn predict_flavor(recipe: &Recipe, ratio: f64) -> FlavorProfile {
    let method = recipe.brew_method();
    let mut f = FlavorProfile {
        acidity: BASELINE,
        sweetness: BASELINE,
        body: BASELINE,
        bitterness: BASELINE,
    };

    // Temperature
    if recipe.temperature > 95.0 {
        f.bitterness += 3;
        f.acidity -= 2;
    } else if recipe.temperature < 88.0 && method != BrewMethod::ColdBrew {
        f.acidity += 3;
        f.sweetness -= 1;
    }

    // Ratio
    if method == BrewMethod::Espresso {
        f.body += 3;
        if ratio < 2.0 {
            f.body += 2;
            f.sweetness += 1;
        }
    } else if ratio < 14.0 {
        f.body += 2;
    } else if ratio > 17.0 {
        f.body -= 2;
        f.bitterness += 1;
    }

    // Time
    let time_diff = recipe
        .brew_time
        .saturating_sub(method.target_time_seconds());
    if time_diff > 30 {
        f.bitterness += 2;
        f.sweetness -= 1;
    } else if time_diff < -30 {
        f.acidity += 2;
        f.body -= 1;
    }

    clamp_profile(f)
}

fn clamp_profile(f: FlavorProfile) -> FlavorProfile {
    let clamp = |v: i32| v.clamp(MIN_ATTRIBUTE, MAX_ATTRIBUTE);
    FlavorProfile {
        acidity: clamp(f.acidity),
        sweetness: clamp(f.sweetness),
        body: clamp(f.body),
        bitterness: clamp(f.bitterness),
    }
}
