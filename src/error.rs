//! Request-level errors and their HTTP mapping

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a request can end in. None of them are retryable with the
/// same input, and none outlive the request.
#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("invalid {parameter} '{value}', expected one of: {}", .valid.join(", "))]
    Validation {
        parameter: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("missing or invalid API key")]
    Unauthorized,

    #[error("too many requests, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },
}

impl ApiError {
    pub fn validation(parameter: &'static str, value: &str, valid: Vec<&'static str>) -> Self {
        ApiError::Validation {
            parameter,
            value: value.to_string(),
            valid,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::InvalidInput(_) | ApiError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    /// Short machine-readable kind used in the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "validation_error",
            ApiError::InvalidInput(_) => "invalid_input",
            ApiError::Conflict(_) => "conflict",
            ApiError::NotFound(_) => "not_found",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::Unauthorized => "unauthorized",
            ApiError::RateLimited { .. } => "rate_limited",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        if let ApiError::Validation { parameter, valid, .. } = &self {
            body["parameter"] = json!(parameter);
            body["validValues"] = json!(valid);
        }

        let mut response = (status, Json(body)).into_response();
        if let ApiError::RateLimited { retry_after_secs } = self {
            if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}
