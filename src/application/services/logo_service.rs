//! Logo upload credential service.

use chrono::{TimeDelta, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Company;
use crate::domain::errors::CompanyError;
use crate::domain::repositories::CompanyRepository;
use crate::domain::storage::{LOGOS_BUCKET, LogoStorage, UploadCredential, UploadRequest};

/// Lifetime of an upload credential, in seconds.
pub const LOGOS_EXPIRES_SECS: i64 = 60 * 60;
/// Smallest accepted logo, 256 KiB.
pub const LOGOS_MIN_SIZE: u64 = 256 * 1024;
/// Largest accepted logo, 1 MiB.
pub const LOGOS_MAX_SIZE: u64 = 1024 * 1024;

/// Issues delegated upload credentials for company logos.
///
/// File bytes never pass through this service: clients upload directly to
/// object storage with the credential it issues.
pub struct LogoService<R, S>
where
    R: CompanyRepository + ?Sized,
    S: LogoStorage + ?Sized,
{
    repository: Arc<R>,
    storage: Arc<S>,
}

impl<R, S> LogoService<R, S>
where
    R: CompanyRepository + ?Sized,
    S: LogoStorage + ?Sized,
{
    /// Creates a new logo service.
    pub fn new(repository: Arc<R>, storage: Arc<S>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// Issues a one-hour credential to upload the logo of company `id`.
    ///
    /// The credential only admits objects between [`LOGOS_MIN_SIZE`] and
    /// [`LOGOS_MAX_SIZE`] bytes at key `id` in [`LOGOS_BUCKET`].
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Internal`] on database or signing errors.
    pub async fn issue_upload_credential(
        &self,
        id: Uuid,
    ) -> Result<UploadCredential, CompanyError> {
        self.repository.get_by_id(id).await?;

        let request = UploadRequest {
            bucket: LOGOS_BUCKET.to_string(),
            key: id.to_string(),
            expires_at: Utc::now() + TimeDelta::seconds(LOGOS_EXPIRES_SECS),
            min_size: LOGOS_MIN_SIZE,
            max_size: LOGOS_MAX_SIZE,
        };

        let credential = self.storage.presign_upload(&request).await?;

        tracing::debug!(company_id = %id, expires_at = %credential.expires_at, "logo upload credential issued");
        Ok(credential)
    }

    /// Records the uploaded logo on the company.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist or no
    /// logo object has been uploaded.
    /// Returns [`CompanyError::Internal`] on database or storage errors.
    pub async fn confirm_logo(&self, id: Uuid) -> Result<Company, CompanyError> {
        self.repository.get_by_id(id).await?;

        let key = id.to_string();
        if !self.storage.object_exists(LOGOS_BUCKET, &key).await? {
            return Err(CompanyError::NotFound("Logo"));
        }

        let logo_url = self.storage.object_url(LOGOS_BUCKET, &key);
        self.repository.set_logo_url(id, Some(logo_url)).await
    }

    /// Deletes the logo of company `id` and clears its reference.
    ///
    /// Idempotent: revoking a logo that was never uploaded succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CompanyError::NotFound`] if the company does not exist.
    /// Returns [`CompanyError::Internal`] on database or storage errors.
    pub async fn revoke_logo(&self, id: Uuid) -> Result<(), CompanyError> {
        let company = self.repository.get_by_id(id).await?;

        self.storage
            .remove_object(LOGOS_BUCKET, &id.to_string())
            .await?;

        if company.logo_url.is_some() {
            self.repository.set_logo_url(id, None).await?;
        }

        tracing::debug!(company_id = %id, "logo revoked");
        Ok(())
    }

    /// Reports object storage reachability for health checks.
    pub async fn is_storage_healthy(&self) -> bool {
        self.storage.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CreateCompanyInput;
    use crate::domain::repositories::MockCompanyRepository;
    use crate::domain::storage::MockLogoStorage;
    use std::collections::BTreeMap;

    fn create_test_company() -> Company {
        Company::new(CreateCompanyInput {
            title: "Acme".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    fn credential_for(request: &UploadRequest) -> UploadCredential {
        let mut fields = BTreeMap::new();
        fields.insert("key".to_string(), request.key.clone());
        UploadCredential {
            url: format!("http://storage.local/{}", request.bucket),
            fields,
            expires_at: request.expires_at,
        }
    }

    #[tokio::test]
    async fn test_issue_upload_credential_constraints() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        let company = create_test_company();
        let id = company.id;
        mock_repo
            .expect_get_by_id()
            .withf(move |got| *got == id)
            .times(1)
            .returning(move |_| Ok(company.clone()));

        let expected_key = id.to_string();
        mock_storage
            .expect_presign_upload()
            .withf(move |req| {
                req.bucket == "logos"
                    && req.key == expected_key
                    && req.min_size == 262_144
                    && req.max_size == 1_048_576
            })
            .times(1)
            .returning(|req| Ok(credential_for(req)));

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        let before = Utc::now();
        let credential = service.issue_upload_credential(id).await.unwrap();
        let after = Utc::now();

        assert_eq!(credential.url, "http://storage.local/logos");
        assert_eq!(credential.fields["key"], id.to_string());
        assert!(credential.expires_at >= before + TimeDelta::hours(1));
        assert!(credential.expires_at <= after + TimeDelta::hours(1));
    }

    #[tokio::test]
    async fn test_issue_upload_credential_unknown_company() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(|_| Err(CompanyError::company_not_found()));
        mock_storage.expect_presign_upload().times(0);

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        let result = service.issue_upload_credential(Uuid::new_v4()).await;

        assert!(matches!(result, Err(CompanyError::NotFound("Company"))));
    }

    #[tokio::test]
    async fn test_revoke_logo_is_idempotent() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        let company = create_test_company();
        let id = company.id;
        mock_repo
            .expect_get_by_id()
            .times(2)
            .returning(move |_| Ok(company.clone()));
        mock_repo.expect_set_logo_url().times(0);

        mock_storage
            .expect_remove_object()
            .withf(move |bucket, key| bucket == "logos" && key == id.to_string())
            .times(2)
            .returning(|_, _| Ok(()));

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        assert!(service.revoke_logo(id).await.is_ok());
        assert!(service.revoke_logo(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_revoke_logo_clears_reference() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        let mut company = create_test_company();
        company.logo_url = Some("http://storage.local/logos/x".to_string());
        let id = company.id;
        let cleared = Company {
            logo_url: None,
            ..company.clone()
        };

        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(move |_| Ok(company.clone()));
        mock_repo
            .expect_set_logo_url()
            .withf(move |got, url| *got == id && url.is_none())
            .times(1)
            .returning(move |_, _| Ok(cleared.clone()));

        mock_storage
            .expect_remove_object()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        assert!(service.revoke_logo(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_revoke_logo_unknown_company() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(|_| Err(CompanyError::company_not_found()));
        mock_storage.expect_remove_object().times(0);

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        let result = service.revoke_logo(Uuid::new_v4()).await;

        assert!(matches!(result, Err(CompanyError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_confirm_logo_sets_url() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        let company = create_test_company();
        let id = company.id;
        let url = format!("http://storage.local/logos/{id}");
        let with_logo = Company {
            logo_url: Some(url.clone()),
            ..company.clone()
        };

        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(move |_| Ok(company.clone()));
        let expected = url.clone();
        mock_repo
            .expect_set_logo_url()
            .withf(move |got, logo| *got == id && logo.as_deref() == Some(expected.as_str()))
            .times(1)
            .returning(move |_, _| Ok(with_logo.clone()));

        mock_storage
            .expect_object_exists()
            .times(1)
            .returning(|_, _| Ok(true));
        mock_storage
            .expect_object_url()
            .times(1)
            .returning(|bucket, key| format!("http://storage.local/{bucket}/{key}"));

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        let confirmed = service.confirm_logo(id).await.unwrap();
        assert_eq!(confirmed.logo_url, Some(url));
    }

    #[tokio::test]
    async fn test_confirm_logo_without_upload() {
        let mut mock_repo = MockCompanyRepository::new();
        let mut mock_storage = MockLogoStorage::new();

        let company = create_test_company();
        let id = company.id;
        mock_repo
            .expect_get_by_id()
            .times(1)
            .returning(move |_| Ok(company.clone()));
        mock_repo.expect_set_logo_url().times(0);

        mock_storage
            .expect_object_exists()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = LogoService::new(Arc::new(mock_repo), Arc::new(mock_storage));

        let result = service.confirm_logo(id).await;

        assert!(matches!(result, Err(CompanyError::NotFound("Logo"))));
    }
}
