//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod companies;
pub mod health;
pub mod logo;

pub use companies::{
    create_company_handler, delete_company_handler, get_company_handler, list_companies_handler,
    update_company_handler,
};
pub use health::health_handler;
pub use logo::{confirm_logo_handler, issue_logo_upload_handler, revoke_logo_handler};
