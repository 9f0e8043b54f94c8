//! HTTP handlers for recipe scoring and brew helpers

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use shared::{evaluate, recipe_card, water_for_ratio, Recipe, ScoreResult};

use crate::error::AppResult;

/// Input for the water calculator
#[derive(Debug, Deserialize, Serialize)]
pub struct CalculatorInput {
    pub coffee_dose: f64,
    pub target_ratio: f64,
}

/// Water calculator result
#[derive(Debug, Deserialize, Serialize)]
pub struct CalculatorOutput {
    pub water_yield: f64,
}

/// Input for rendering a shareable recipe card
#[derive(Debug, Deserialize, Serialize)]
pub struct RecipeCardInput {
    pub recipe: Recipe,
    pub total_score: i32,
}

/// Rendered recipe card
#[derive(Debug, Deserialize, Serialize)]
pub struct RecipeCardOutput {
    pub text: String,
}

/// Score a brew recipe
pub async fn score_recipe(
    payload: Result<Json<Recipe>, JsonRejection>,
) -> AppResult<Json<ScoreResult>> {
    let Json(recipe) = payload?;
    let result = evaluate(&recipe);

    tracing::debug!(
        method = %recipe.method,
        total_score = result.total_score,
        ratio = result.calculated_ratio,
        "Scored recipe"
    );

    Ok(Json(result))
}

/// Compute the water needed for a dose at a target ratio
pub async fn calculate_water(
    payload: Result<Json<CalculatorInput>, JsonRejection>,
) -> AppResult<Json<CalculatorOutput>> {
    let Json(input) = payload?;
    let water_yield = water_for_ratio(input.coffee_dose, input.target_ratio)?;
    Ok(Json(CalculatorOutput { water_yield }))
}

/// Render the plain-text recipe card
pub async fn render_recipe_card(
    payload: Result<Json<RecipeCardInput>, JsonRejection>,
) -> AppResult<Json<RecipeCardOutput>> {
    let Json(input) = payload?;
    Ok(Json(RecipeCardOutput {
        text: recipe_card(&input.recipe, input.total_score),
    }))
}
