//! Domain error model.

use thiserror::Error;

use crate::validation::FieldError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Transport
/// concerns (status codes, body limits) belong to the HTTP layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed their declared constraints.
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    /// A requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Single-field validation failure.
    pub fn validation(loc: &[&str], msg: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError::new(loc, msg)])
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Field errors carried by a validation failure (empty otherwise).
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            Self::NotFound(_) => &[],
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
