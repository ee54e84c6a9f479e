//! Business logic services for the application layer.

pub mod company_service;
pub mod logo_service;

pub use company_service::CompanyService;
pub use logo_service::{LOGOS_EXPIRES_SECS, LOGOS_MAX_SIZE, LOGOS_MIN_SIZE, LogoService};
