//! S3-compatible object storage backend (AWS S3, MinIO).

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use s3::creds::Credentials;
use s3::error::S3Error;
use s3::post_policy::{PostPolicy, PostPolicyField, PostPolicyValue};
use s3::{Bucket, Region};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

use crate::config::StorageConfig;
use crate::domain::errors::CompanyError;
use crate::domain::storage::{LOGOS_BUCKET, LogoStorage, UploadCredential, UploadRequest};

/// Key probed by the health check. It never exists.
const HEALTH_PROBE_KEY: &str = ".health";

/// Path-style S3 client built on `rust-s3`.
///
/// Objects live at `<endpoint>/<bucket>/<key>`. Upload credentials are
/// browser POST policies signed locally; management calls go to the backend.
pub struct S3Storage {
    region: Region,
    credentials: Credentials,
    public_url: String,
    timeout: Duration,
}

impl S3Storage {
    /// Builds a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint does not parse or the credentials
    /// are rejected.
    pub fn new(config: &StorageConfig) -> Result<Self> {
        Url::parse(&config.endpoint)
            .with_context(|| format!("invalid storage endpoint '{}'", config.endpoint))?;

        let credentials = Credentials::new(
            Some(config.access_key.as_str()),
            Some(config.secret_key.as_str()),
            None,
            None,
            None,
        )
        .context("invalid storage credentials")?;

        Ok(Self {
            region: Region::Custom {
                region: config.region.clone(),
                endpoint: config.endpoint.trim_end_matches('/').to_string(),
            },
            credentials,
            public_url: config.public_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds),
        })
    }

    fn bucket(&self, name: &str) -> Result<Box<Bucket>, CompanyError> {
        Bucket::new(name, self.region.clone(), self.credentials.clone())
            .and_then(|bucket| bucket.with_path_style().with_request_timeout(self.timeout))
            .map_err(|e| CompanyError::internal(format!("storage bucket {name}: {e}")))
    }
}

fn is_not_found(error: &S3Error) -> bool {
    matches!(error, S3Error::HttpFailWithBody(404, _))
}

/// Seconds left until `expires_at`, at least one.
fn expires_in_secs(request: &UploadRequest) -> u32 {
    let secs = (request.expires_at - Utc::now()).num_seconds();
    u32::try_from(secs.max(1)).unwrap_or(u32::MAX)
}

#[async_trait]
impl LogoStorage for S3Storage {
    async fn presign_upload(
        &self,
        request: &UploadRequest,
    ) -> Result<UploadCredential, CompanyError> {
        let bucket = self.bucket(&request.bucket)?;

        let min_size = u32::try_from(request.min_size)
            .map_err(|_| CompanyError::internal("upload min size exceeds u32"))?;
        let max_size = u32::try_from(request.max_size)
            .map_err(|_| CompanyError::internal("upload max size exceeds u32"))?;

        let policy = PostPolicy::new(expires_in_secs(request))
            .condition(
                PostPolicyField::Key,
                PostPolicyValue::Exact(Cow::from(request.key.as_str())),
            )
            .and_then(|policy| {
                policy.condition(
                    PostPolicyField::ContentLengthRange,
                    PostPolicyValue::Range(min_size, max_size),
                )
            })
            .map_err(|e| CompanyError::internal(format!("upload policy: {e}")))?;

        let presigned = bucket
            .presign_post(policy)
            .await
            .map_err(|e| CompanyError::internal(format!("presign {}: {e}", request.key)))?;

        Ok(UploadCredential {
            url: presigned.url,
            fields: presigned.fields.into_iter().collect::<BTreeMap<_, _>>(),
            expires_at: request.expires_at,
        })
    }

    async fn remove_object(&self, bucket: &str, key: &str) -> Result<(), CompanyError> {
        match self.bucket(bucket)?.delete_object(key).await {
            Ok(response) => {
                tracing::debug!(bucket, key, status = response.status_code(), "object removed");
                Ok(())
            }
            Err(e) if is_not_found(&e) => Ok(()),
            Err(e) => Err(CompanyError::internal(format!(
                "storage DELETE {bucket}/{key}: {e}"
            ))),
        }
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, CompanyError> {
        match self.bucket(bucket)?.head_object(key).await {
            Ok((_, status)) if (200..300).contains(&status) => Ok(true),
            Ok((_, 404)) => Ok(false),
            Err(e) if is_not_found(&e) => Ok(false),
            Ok((_, status)) => Err(CompanyError::internal(format!(
                "storage HEAD {bucket}/{key} returned {status}"
            ))),
            Err(e) => Err(CompanyError::internal(format!(
                "storage HEAD {bucket}/{key}: {e}"
            ))),
        }
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/{}/{}", self.public_url, bucket, key)
    }

    async fn health_check(&self) -> bool {
        match self.object_exists(LOGOS_BUCKET, HEALTH_PROBE_KEY).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "storage health check failed");
                false
            }
        }
    }
}
