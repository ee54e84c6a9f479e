//! Object storage contract for company logos.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::domain::errors::CompanyError;

/// Bucket holding one logo object per company, keyed by company id.
pub const LOGOS_BUCKET: &str = "logos";

/// Constraints for a delegated upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub bucket: String,
    pub key: String,
    pub expires_at: DateTime<Utc>,
    /// Smallest accepted object size in bytes.
    pub min_size: u64,
    /// Largest accepted object size in bytes.
    pub max_size: u64,
}

/// A scoped, expiring write credential.
///
/// The client submits `fields` verbatim as form fields alongside the file
/// in a `multipart/form-data` POST to `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCredential {
    pub url: String,
    pub fields: BTreeMap<String, String>,
    pub expires_at: DateTime<Utc>,
}

/// Object storage backend holding logo files.
///
/// The service never reads or writes file bytes; it only issues credentials
/// and manages object lifecycle.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::S3Storage`] - S3/MinIO-compatible backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LogoStorage: Send + Sync {
    /// Produces a signed upload credential honoring `request`.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Internal`] if the credential cannot be produced.
    async fn presign_upload(&self, request: &UploadRequest)
    -> Result<UploadCredential, CompanyError>;

    /// Deletes an object. Deleting a missing object succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Internal`] on backend errors.
    async fn remove_object(&self, bucket: &str, key: &str) -> Result<(), CompanyError>;

    /// Reports whether an object exists.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Internal`] on backend errors.
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, CompanyError>;

    /// Public URL under which an object is served.
    fn object_url(&self, bucket: &str, key: &str) -> String;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
