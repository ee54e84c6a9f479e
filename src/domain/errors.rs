//! Domain error taxonomy shared by entities, repositories and services.
//!
//! Errors are typed here and passed through the application layer unchanged.
//! Only the HTTP boundary ([`crate::error::AppError`]) decides wire status codes.

use serde::Serialize;
use std::fmt;

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Errors produced by company operations.
#[derive(Debug, thiserror::Error)]
pub enum CompanyError {
    /// One or more fields violate their constraints. Never truncated to the first failure.
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    /// A uniqueness constraint rejected the write.
    #[error("conflict: {0}")]
    Conflict(FieldError),

    /// The named record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unclassified store or storage failure. The detail is for logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CompanyError {
    /// Missing company record.
    pub fn company_not_found() -> Self {
        Self::NotFound("Company")
    }

    /// Title already taken by another company.
    pub fn title_taken() -> Self {
        Self::Conflict(FieldError::new("title", "must be unique"))
    }

    pub fn internal(detail: impl fmt::Display) -> Self {
        Self::Internal(detail.to_string())
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
