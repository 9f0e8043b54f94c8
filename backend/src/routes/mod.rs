//! Route definitions for the Specialty Coffee Brewer

use axum::{routing::post, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/score", post(handlers::score_recipe))
        .route("/calculator", post(handlers::calculate_water))
        .route("/recipe-card", post(handlers::render_recipe_card))
}
