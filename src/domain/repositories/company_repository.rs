//! Repository trait for company data access.

use crate::domain::entities::Company;
use crate::domain::errors::CompanyError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for persisting companies.
///
/// Every call is a store round-trip; nothing is cached. Dropping a returned
/// future aborts the operation and releases its connection.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCompanyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_company.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persists a new company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Conflict`] on field `title` if the title is already taken.
    /// Returns [`CompanyError::Internal`] on database errors.
    async fn create(&self, company: Company) -> Result<Company, CompanyError>;

    /// Overwrites title, description, website and `updated_at` of an existing company.
    ///
    /// `logo_url` keeps whatever the store holds; the returned record reflects it.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if no company has `company.id`.
    /// Returns [`CompanyError::Conflict`] on field `title` if the title is already taken.
    /// Returns [`CompanyError::Internal`] on database errors.
    async fn update(&self, company: Company) -> Result<Company, CompanyError>;

    /// Removes a company permanently.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if no row was deleted.
    /// Returns [`CompanyError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<(), CompanyError>;

    /// Finds a company by id.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Internal`] on database errors.
    async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyError>;

    /// Loads every company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Internal`] on database errors.
    async fn get_all(&self) -> Result<Vec<Company>, CompanyError>;

    /// Sets or clears the stored logo reference.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Internal`] on database errors.
    async fn set_logo_url(
        &self,
        id: Uuid,
        logo_url: Option<String>,
    ) -> Result<Company, CompanyError>;

    /// Checks if the store is reachable.
    async fn health_check(&self) -> bool;
}
