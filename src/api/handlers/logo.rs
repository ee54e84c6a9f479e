//! Handlers for company logo endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use uuid::Uuid;

use super::companies::company_id;
use crate::api::dto::company::CompanyResponse;
use crate::api::dto::logo::UploadCredentialResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Issues a one-hour credential for uploading the company logo directly to
/// object storage.
///
/// # Endpoint
///
/// `POST /companies/{id}/logo`
///
/// # Response
///
/// ```json
/// {
///   "url": "http://localhost:9000/logos",
///   "fields": {
///     "bucket": "logos",
///     "key": "2b0c5a3e-...",
///     "policy": "eyJleHBpcmF0aW9uIjoi...",
///     "x-amz-algorithm": "AWS4-HMAC-SHA256",
///     "x-amz-credential": "minioadmin/20250314/us-east-1/s3/aws4_request",
///     "x-amz-date": "20250314T092653Z",
///     "x-amz-signature": "6f1e..."
///   },
///   "expires_at": "2025-03-14T10:26:53Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the company does not exist.
pub async fn issue_logo_upload_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<UploadCredentialResponse>, AppError> {
    let id = company_id(path)?;

    let credential = state.logo_service.issue_upload_credential(id).await?;

    Ok(Json(credential.into()))
}

/// Records an uploaded logo on the company.
///
/// # Endpoint
///
/// `PUT /companies/{id}/logo`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the company does not exist or nothing was uploaded.
pub async fn confirm_logo_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CompanyResponse>, AppError> {
    let id = company_id(path)?;

    let company = state.logo_service.confirm_logo(id).await?;

    Ok(Json(company.into()))
}

/// Deletes the company logo. Idempotent.
///
/// # Endpoint
///
/// `DELETE /companies/{id}/logo`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the company does not exist.
pub async fn revoke_logo_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = company_id(path)?;

    state.logo_service.revoke_logo(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
