//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CompanyService, LogoService};
use crate::domain::repositories::CompanyRepository;
use crate::domain::storage::LogoStorage;

/// Services behind trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<CompanyService<dyn CompanyRepository>>,
    pub logo_service: Arc<LogoService<dyn CompanyRepository, dyn LogoStorage>>,
}

impl AppState {
    /// Wires both services over one repository and one storage backend.
    pub fn new(repository: Arc<dyn CompanyRepository>, storage: Arc<dyn LogoStorage>) -> Self {
        Self {
            company_service: Arc::new(CompanyService::new(repository.clone())),
            logo_service: Arc::new(LogoService::new(repository, storage)),
        }
    }
}
