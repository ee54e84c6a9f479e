//! DTOs for logo endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::storage::UploadCredential;

/// Response of `POST /companies/{id}/logo`.
///
/// Clients POST `multipart/form-data` to `url` with every entry of `fields`
/// followed by the file part.
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadCredentialResponse {
    pub url: String,
    pub fields: BTreeMap<String, String>,
    pub expires_at: DateTime<Utc>,
}

impl From<UploadCredential> for UploadCredentialResponse {
    fn from(c: UploadCredential) -> Self {
        Self {
            url: c.url,
            fields: c.fields,
            expires_at: c.expires_at,
        }
    }
}
