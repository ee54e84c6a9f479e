//! DTOs for company endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use uuid::Uuid;

use crate::domain::entities::{Company, CreateCompanyInput, UpdateCompanyInput};

/// Request body for `POST /companies`.
///
/// A missing `title` deserializes to an empty string so it is reported as a
/// field validation error rather than a malformed body.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

impl From<CreateCompanyRequest> for CreateCompanyInput {
    fn from(req: CreateCompanyRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            website: req.website,
        }
    }
}

/// Request body for `PUT /companies/{id}`.
///
/// All fields are optional; only provided fields are changed.
///
/// # `website` semantics
///
/// - **Absent** → leave existing value unchanged
/// - **`null`** → clear the website
/// - **String** → set new website
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCompanyRequest {
    pub title: Option<String>,
    pub description: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub website: Option<Option<String>>,
}

impl From<UpdateCompanyRequest> for UpdateCompanyInput {
    fn from(req: UpdateCompanyRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            website: req.website,
        }
    }
}

/// Company as returned by every endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            title: c.title,
            description: c.description,
            website: c.website,
            logo_url: c.logo_url,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
