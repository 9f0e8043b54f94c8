//! WebAssembly module for the Specialty Coffee Brewer
//!
//! Provides client-side computation for:
//! - Recipe scoring and flavor prediction
//! - Water calculator
//! - Shareable recipe cards

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;

/// Score a recipe given as JSON, returning the result as JSON
#[wasm_bindgen]
pub fn score_recipe(recipe_json: &str) -> Result<String, JsValue> {
    score_recipe_json(recipe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))
}

/// Water in grams for a dose at 1:`target_ratio`, 0 when either input is unusable
#[wasm_bindgen]
pub fn calculate_water(coffee_dose: f64, target_ratio: f64) -> f64 {
    shared::water_for_ratio(coffee_dose, target_ratio).unwrap_or(0.0)
}

/// Classify a total score into a quality tier
#[wasm_bindgen]
pub fn classify_total_score(total_score: i32) -> String {
    format!("{}", BrewQuality::classify(total_score))
}

/// Render the shareable recipe card for a recipe given as JSON
#[wasm_bindgen]
pub fn recipe_card_text(recipe_json: &str, total_score: i32) -> Result<String, JsValue> {
    let recipe: Recipe = serde_json::from_str(recipe_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid recipe JSON: {}", e)))?;
    Ok(shared::recipe_card(&recipe, total_score))
}

fn score_recipe_json(recipe_json: &str) -> Result<String, serde_json::Error> {
    let recipe: Recipe = serde_json::from_str(recipe_json)?;
    serde_json::to_string(&shared::evaluate(&recipe))
}
