//! Application layer services.
//!
//! Services sequence entity rules and repository/storage calls. They perform
//! no validation of their own and pass domain errors through unchanged.
//!
//! # Available Services
//!
//! - [`services::company_service::CompanyService`] - Company CRUD
//! - [`services::logo_service::LogoService`] - Logo upload credentials and lifecycle

pub mod services;
