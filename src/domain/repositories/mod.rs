//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CompanyRepository`] - Company CRUD operations
//!
//! # Testing
//!
//! See integration tests in `tests/repository_company.rs` for usage examples.

pub mod company_repository;

pub use company_repository::CompanyRepository;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
