//! Company management service.

use crate::domain::entities::{Company, CreateCompanyInput, UpdateCompanyInput};
use crate::domain::errors::CompanyError;
use crate::domain::repositories::CompanyRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Service sequencing entity rules and repository calls.
///
/// Performs no validation of its own; errors from the entity and the
/// repository are returned unchanged.
pub struct CompanyService<R: CompanyRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CompanyRepository + ?Sized> CompanyService<R> {
    /// Creates a new company service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Builds a company from `input` and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Validation`] if the input is invalid.
    /// Returns [`CompanyError::Conflict`] if the title is taken.
    /// Returns [`CompanyError::Internal`] on database errors.
    pub async fn create(&self, input: CreateCompanyInput) -> Result<Company, CompanyError> {
        let company = Company::new(input)?;
        let created = self.repository.create(company).await?;

        tracing::info!(company_id = %created.id, "company created");
        Ok(created)
    }

    /// Applies a partial update to a stored company.
    ///
    /// Read-modify-write without a version check: concurrent updates to the
    /// same company resolve as last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Validation`] if the updated record is invalid.
    /// Returns [`CompanyError::Conflict`] if the new title is taken.
    /// Returns [`CompanyError::Internal`] on database errors.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateCompanyInput,
    ) -> Result<Company, CompanyError> {
        let existing = self.repository.get_by_id(id).await?;
        let updated = existing.apply_update(input)?;

        self.repository.update(updated).await
    }

    /// Deletes a company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Internal`] on database errors.
    pub async fn delete(&self, id: Uuid) -> Result<(), CompanyError> {
        self.repository.delete(id).await?;

        tracing::info!(company_id = %id, "company deleted");
        Ok(())
    }

    /// Retrieves a company by id.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyError> {
        self.repository.get_by_id(id).await
    }

    /// Lists all companies.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Internal`] on database errors.
    pub async fn get_all(&self) -> Result<Vec<Company>, CompanyError> {
        self.repository.get_all().await
    }

    /// Reports store reachability for health checks.
    pub async fn is_store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
