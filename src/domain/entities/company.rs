//! Company entity with its validation and mutation rules.

use chrono::{DateTime, SubsecRound, TimeDelta, Utc};
use std::borrow::Cow;
use url::Url;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::errors::{CompanyError, FieldError};

/// Order in which field errors are reported.
const FIELD_ORDER: [&str; 3] = ["title", "description", "website"];

/// A company record.
///
/// Instances are only produced by [`Company::new`], [`Company::apply_update`] or
/// rehydrated from the store, so every persisted record has passed
/// [`Company::ensure_valid`].
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Company {
    pub id: Uuid,
    #[validate(length(min = 3, max = 64, message = "must be between 3 and 64 characters"))]
    pub title: String,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub description: String,
    #[validate(custom(function = "validate_website"))]
    pub website: Option<String>,
    /// Owned by the logo flow; construction and updates never set it.
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a company.
#[derive(Debug, Clone, Default)]
pub struct CreateCompanyInput {
    pub title: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Partial update for an existing company.
///
/// `None` fields are left unchanged.
/// `website: Some(None)` clears the website; `Some(Some(url))` sets it.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub website: Option<Option<String>>,
}

impl Company {
    /// Builds a new, validated company with a fresh id.
    ///
    /// `created_at` and `updated_at` are equal on the returned record.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Validation`] listing every violated field.
    pub fn new(input: CreateCompanyInput) -> Result<Self, CompanyError> {
        let now = now_micros();

        let mut company = Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            website: input.website,
            logo_url: None,
            created_at: now,
            updated_at: now,
        };

        company.normalize();
        company.ensure_valid()?;

        Ok(company)
    }

    /// Applies a partial update and re-validates the whole record.
    ///
    /// `id` and `created_at` are never touched; `updated_at` always moves forward.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Validation`] if the resulting record is invalid,
    /// including fields the update did not supply.
    pub fn apply_update(mut self, input: UpdateCompanyInput) -> Result<Self, CompanyError> {
        if let Some(title) = input.title {
            self.title = title;
        }

        if let Some(description) = input.description {
            self.description = description;
        }

        if let Some(website) = input.website {
            self.website = website;
        }

        self.normalize();
        self.touch();
        self.ensure_valid()?;

        Ok(self)
    }

    /// Checks the field rules.
    ///
    /// This is the only place the rules are evaluated; construction and update
    /// both go through it.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::Validation`] with one entry per violation.
    pub fn ensure_valid(&self) -> Result<(), CompanyError> {
        self.validate()
            .map_err(|errors| CompanyError::Validation(collect_field_errors(&errors)))
    }

    fn normalize(&mut self) {
        let title = self.title.trim();
        if title.len() != self.title.len() {
            self.title = title.to_string();
        }

        let description = self.description.trim();
        if description.len() != self.description.len() {
            self.description = description.to_string();
        }

        if let Some(website) = self.website.as_mut() {
            let trimmed = website.trim();
            if trimmed.len() != website.len() {
                *website = trimmed.to_string();
            }
        }
    }

    fn touch(&mut self) {
        let now = now_micros();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

/// Current time at the precision the store keeps.
fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn validate_website(website: &str) -> Result<(), ValidationError> {
    match Url::parse(website) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ValidationError::new("website").with_message(Cow::Borrowed(
            "must be a valid URL starting with http:// or https://",
        ))),
    }
}

fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                FieldError::new(field.to_string(), message)
            })
        })
        .collect();

    collected.sort_by_key(|e| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == e.field)
            .unwrap_or(FIELD_ORDER.len())
    });

    collected
}
