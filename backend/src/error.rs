//! Error handling for the Specialty Coffee Brewer
//!
//! Provides consistent error responses in English and Indonesian

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::CalculatorError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Calculator error: {0}")]
    Calculator(#[from] CalculatorError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "BAD_REQUEST".to_string(),
                    message_en: format!("Bad request: {}", msg),
                    message_id: "Permintaan tidak valid.".to_string(),
                    field: None,
                },
            ),
            AppError::Calculator(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "CALCULATOR_ERROR".to_string(),
                    message_en: err.to_string(),
                    message_id: err.message_id().to_string(),
                    field: Some(
                        match err {
                            CalculatorError::InvalidDose(_) => "coffee_dose",
                            CalculatorError::InvalidRatio(_) => "target_ratio",
                        }
                        .to_string(),
                    ),
                },
            ),
        };

        // Log the error for debugging
        tracing::warn!("Request rejected: {}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (
                AppError::Calculator(CalculatorError::InvalidRatio(0.0)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
