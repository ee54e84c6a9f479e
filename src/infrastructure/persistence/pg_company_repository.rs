//! PostgreSQL implementation of company repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Company;
use crate::domain::errors::CompanyError;
use crate::domain::repositories::CompanyRepository;
use crate::utils::db_error::is_unique_violation_on;

/// Unique constraint backing title uniqueness.
const TITLE_CONSTRAINT: &str = "companies_title_key";

/// PostgreSQL repository for companies.
///
/// Title uniqueness is enforced by the `companies_title_key` constraint, so two
/// concurrent creates with the same title race to it and the loser gets
/// [`CompanyError::Conflict`].
pub struct PgCompanyRepository {
    pool: Arc<PgPool>,
}

impl PgCompanyRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    title: String,
    description: String,
    website: Option<String>,
    logo_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            website: row.website,
            logo_url: row.logo_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn map_write_error(e: sqlx::Error) -> CompanyError {
    if is_unique_violation_on(&e, TITLE_CONSTRAINT) {
        return CompanyError::title_taken();
    }

    map_db_error(e)
}

fn map_db_error(e: sqlx::Error) -> CompanyError {
    CompanyError::internal(format!("database error: {e}"))
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            INSERT INTO companies (id, title, description, website, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, website, logo_url, created_at, updated_at
            "#,
        )
        .bind(company.id)
        .bind(&company.title)
        .bind(&company.description)
        .bind(&company.website)
        .bind(company.created_at)
        .bind(company.updated_at)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies SET
                title       = $2,
                description = $3,
                website     = $4,
                updated_at  = $5
            WHERE id = $1
            RETURNING id, title, description, website, logo_url, created_at, updated_at
            "#,
        )
        .bind(company.id)
        .bind(&company.title)
        .bind(&company.description)
        .bind(&company.website)
        .bind(company.updated_at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        row.map(Company::from)
            .ok_or_else(CompanyError::company_not_found)
    }

    async fn delete(&self, id: Uuid) -> Result<(), CompanyError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::company_not_found());
        }

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyError> {
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, title, description, website, logo_url, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_db_error)?;

        row.map(Company::from)
            .ok_or_else(CompanyError::company_not_found)
    }

    async fn get_all(&self) -> Result<Vec<Company>, CompanyError> {
        let rows = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT id, title, description, website, logo_url, created_at, updated_at
            FROM companies
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Company::from).collect())
    }

    async fn set_logo_url(
        &self,
        id: Uuid,
        logo_url: Option<String>,
    ) -> Result<Company, CompanyError> {
        // updated_at is left alone: it tracks entity mutations only.
        let row = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies SET logo_url = $2
            WHERE id = $1
            RETURNING id, title, description, website, logo_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(logo_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_db_error)?;

        row.map(Company::from)
            .ok_or_else(CompanyError::company_not_found)
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "database health check failed");
                false
            }
        }
    }
}
