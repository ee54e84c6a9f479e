//! HTTP boundary errors.
//!
//! Every failure leaving a handler is an [`AppError`]. Domain errors are
//! converted with `?` through `From<CompanyError>`, which is the only place a
//! domain error kind is mapped to a status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::errors::{CompanyError, FieldError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed body or path parameters, rejected before the service runs.
    InvalidInput { message: String },
    Validation { errors: Vec<FieldError> },
    Conflict { error: FieldError },
    NotFound { message: String },
    /// Details are logged when the error is built and never sent to the client.
    Internal,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. }
            | AppError::Validation { .. }
            | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CompanyError> for AppError {
    fn from(e: CompanyError) -> Self {
        match e {
            CompanyError::Validation(errors) => AppError::Validation { errors },
            CompanyError::Conflict(error) => AppError::Conflict { error },
            CompanyError::NotFound(entity) => AppError::not_found(format!("{entity} not found")),
            CompanyError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                AppError::Internal
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (code, message, errors) = match self {
            AppError::InvalidInput { message } => ("invalid_input", message, None),
            AppError::Validation { errors } => {
                ("validation_error", "Validation failed".to_string(), Some(errors))
            }
            AppError::Conflict { error } => (
                "conflict",
                format!("Company with this {} already exists", error.field),
                Some(vec![error]),
            ),
            AppError::NotFound { message } => ("not_found", message, None),
            AppError::Internal => (
                "internal_error",
                "Internal server error".to_string(),
                None,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                errors,
            },
        };

        (status, Json(body)).into_response()
    }
}
