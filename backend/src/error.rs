//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting request errors to appropriate HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calorie_estimator_shared::{ErrorDetail, ErrorResponse, EstimateError, InputField};
use thiserror::Error;
use tracing::debug;

/// Generic prompt returned for any rejected estimator input
pub const INVALID_INPUT_MESSAGE: &str = "Provide valid data";

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(InputField),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<EstimateError> for ApiError {
    fn from(err: EstimateError) -> Self {
        ApiError::InvalidInput(err.field())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            ApiError::InvalidInput(field) => {
                debug!(field = %field, "Rejected estimator input");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INVALID_INPUT",
                    INVALID_INPUT_MESSAGE.to_string(),
                    Some(*field),
                )
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
