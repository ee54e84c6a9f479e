//! Handlers for company CRUD endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::company::{CompanyResponse, CreateCompanyRequest, UpdateCompanyRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Unwraps a path id, turning a malformed one into `InvalidInput`.
pub(crate) fn company_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    path.map(|Path(id)| id).map_err(|e| {
        tracing::debug!(error = %e, "rejected path parameters");
        AppError::invalid_input("Invalid request params")
    })
}

fn request_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(payload)| payload).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        AppError::invalid_input("Invalid request body")
    })
}

/// Lists all companies.
///
/// # Endpoint
///
/// `GET /companies`
pub async fn list_companies_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyResponse>>, AppError> {
    let companies = state.company_service.get_all().await?;

    Ok(Json(
        companies.into_iter().map(CompanyResponse::from).collect(),
    ))
}

/// Creates a company.
///
/// # Endpoint
///
/// `POST /companies`
///
/// # Errors
///
/// Returns 400 if the body is malformed, a field is invalid, or the title is taken.
pub async fn create_company_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateCompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError> {
    let payload = request_body(body)?;

    let company = state.company_service.create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(company.into())))
}

/// Fetches one company.
///
/// # Endpoint
///
/// `GET /companies/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the company does not exist.
pub async fn get_company_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CompanyResponse>, AppError> {
    let id = company_id(path)?;

    let company = state.company_service.get_by_id(id).await?;

    Ok(Json(company.into()))
}

/// Partially updates a company.
///
/// # Endpoint
///
/// `PUT /companies/{id}`
///
/// Only supplied fields change. `website: null` clears the website.
///
/// # Errors
///
/// Returns 400 if the id or body is malformed, the updated record is invalid,
/// or the new title is taken.
/// Returns 404 if the company does not exist.
pub async fn update_company_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<UpdateCompanyRequest>, JsonRejection>,
) -> Result<Json<CompanyResponse>, AppError> {
    let id = company_id(path)?;
    let payload = request_body(body)?;

    let company = state.company_service.update(id, payload.into()).await?;

    Ok(Json(company.into()))
}

/// Deletes a company.
///
/// # Endpoint
///
/// `DELETE /companies/{id}`
///
/// The logo object, if any, is left in storage.
///
/// # Errors
///
/// Returns 400 if `id` is not a UUID.
/// Returns 404 if the company does not exist.
pub async fn delete_company_handler(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = company_id(path)?;

    state.company_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
