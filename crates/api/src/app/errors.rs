use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use roster_core::{DomainError, FieldError};

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed parsing or declared field constraints.
    #[error("validation failed ({} field errors)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

impl ApiError {
    /// Validation failure at a request location (`"body"`, `"query"`, ...).
    pub fn invalid(loc: &[&str], msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(loc, msg)])
    }

    /// Map a framework rejection: oversized bodies keep their own status,
    /// everything else is an input error at `loc`.
    pub fn rejected(loc: &str, status: StatusCode, text: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge(text)
        } else {
            Self::invalid(&[loc], text)
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation(errors),
            DomainError::NotFound(msg) => Self::NotFound(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => json_error(
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                json!(errors),
            ),
            ApiError::NotFound(msg) => json_error(StatusCode::NOT_FOUND, "not_found", json!(msg)),
            ApiError::PayloadTooLarge(msg) => {
                json_error(StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", json!(msg))
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, detail: serde_json::Value) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "detail": detail,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (ApiError::invalid(&["body"], "bad"), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::NotFound("x".to_string()), StatusCode::NOT_FOUND),
            (ApiError::PayloadTooLarge("x".to_string()), StatusCode::PAYLOAD_TOO_LARGE),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn oversized_rejection_keeps_413() {
        let err = ApiError::rejected("body", StatusCode::PAYLOAD_TOO_LARGE, "too big".to_string());
        assert!(matches!(err, ApiError::PayloadTooLarge(_)));

        let err = ApiError::rejected("body", StatusCode::BAD_REQUEST, "syntax".to_string());
        assert!(matches!(err, ApiError::Validation(ref e) if e[0].loc == vec!["body"]));
    }

    #[test]
    fn domain_errors_map_one_to_one() {
        let err: ApiError = DomainError::not_found("gone").into();
        assert!(matches!(err, ApiError::NotFound(ref m) if m == "gone"));
    }
}
