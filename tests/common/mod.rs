#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use uuid::Uuid;

use company_catalog::api::routes::{company_routes, health_routes};
use company_catalog::config::StorageConfig;
use company_catalog::domain::entities::Company;
use company_catalog::domain::errors::CompanyError;
use company_catalog::domain::repositories::CompanyRepository;
use company_catalog::domain::storage::{LogoStorage, UploadCredential, UploadRequest};
use company_catalog::infrastructure::storage::S3Storage;
use company_catalog::state::AppState;

/// Repository holding companies in memory.
///
/// The title check and the insert happen under one lock, mirroring the
/// unique constraint of the real table.
#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<HashMap<Uuid, Company>>,
    unhealthy: AtomicBool,
}

impl InMemoryCompanyRepository {
    pub fn set_healthy(&self, healthy: bool) {
        self.unhealthy.store(!healthy, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.companies.lock().await.len()
    }
}

fn title_taken_by_other(companies: &HashMap<Uuid, Company>, id: Uuid, title: &str) -> bool {
    companies.values().any(|c| c.id != id && c.title == title)
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        let mut companies = self.companies.lock().await;
        if title_taken_by_other(&companies, company.id, &company.title) {
            return Err(CompanyError::title_taken());
        }
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let mut companies = self.companies.lock().await;
        if title_taken_by_other(&companies, company.id, &company.title) {
            return Err(CompanyError::title_taken());
        }
        let stored = companies
            .get_mut(&company.id)
            .ok_or_else(CompanyError::company_not_found)?;

        stored.title = company.title;
        stored.description = company.description;
        stored.website = company.website;
        stored.updated_at = company.updated_at;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), CompanyError> {
        self.companies
            .lock()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(CompanyError::company_not_found)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyError> {
        self.companies
            .lock()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(CompanyError::company_not_found)
    }

    async fn get_all(&self) -> Result<Vec<Company>, CompanyError> {
        let mut all: Vec<Company> = self.companies.lock().await.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn set_logo_url(
        &self,
        id: Uuid,
        logo_url: Option<String>,
    ) -> Result<Company, CompanyError> {
        let mut companies = self.companies.lock().await;
        let stored = companies
            .get_mut(&id)
            .ok_or_else(CompanyError::company_not_found)?;
        stored.logo_url = logo_url;
        Ok(stored.clone())
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy.load(Ordering::SeqCst)
    }
}

/// Object storage keeping only the set of existing keys.
#[derive(Default)]
pub struct InMemoryLogoStorage {
    objects: Mutex<HashSet<(String, String)>>,
    issued: Mutex<Vec<UploadRequest>>,
    unhealthy: AtomicBool,
}

impl InMemoryLogoStorage {
    /// Simulates a client finishing its direct upload.
    pub async fn put_object(&self, bucket: &str, key: &str) {
        self.objects
            .lock()
            .await
            .insert((bucket.to_string(), key.to_string()));
    }

    pub async fn contains(&self, bucket: &str, key: &str) -> bool {
        self.objects
            .lock()
            .await
            .contains(&(bucket.to_string(), key.to_string()))
    }

    pub async fn issued(&self) -> Vec<UploadRequest> {
        self.issued.lock().await.clone()
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.unhealthy.store(!healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl LogoStorage for InMemoryLogoStorage {
    async fn presign_upload(
        &self,
        request: &UploadRequest,
    ) -> Result<UploadCredential, CompanyError> {
        self.issued.lock().await.push(request.clone());

        Ok(UploadCredential {
            url: format!("http://storage.test/{}", request.bucket),
            fields: BTreeMap::from([
                ("bucket".to_string(), request.bucket.clone()),
                ("key".to_string(), request.key.clone()),
            ]),
            expires_at: request.expires_at,
        })
    }

    async fn remove_object(&self, bucket: &str, key: &str) -> Result<(), CompanyError> {
        self.objects
            .lock()
            .await
            .remove(&(bucket.to_string(), key.to_string()));
        Ok(())
    }

    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, CompanyError> {
        Ok(self.contains(bucket, key).await)
    }

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("http://storage.test/{bucket}/{key}")
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy.load(Ordering::SeqCst)
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub repository: Arc<InMemoryCompanyRepository>,
    pub storage: Arc<InMemoryLogoStorage>,
}

pub fn router(state: AppState) -> Router {
    company_routes().merge(health_routes()).with_state(state)
}

/// Server over in-memory repository and storage.
pub fn create_test_app() -> TestApp {
    let repository = Arc::new(InMemoryCompanyRepository::default());
    let storage = Arc::new(InMemoryLogoStorage::default());

    let state = AppState::new(repository.clone(), storage.clone());
    let server = TestServer::new(router(state)).unwrap();

    TestApp {
        server,
        repository,
        storage,
    }
}

/// Storage settings for an S3 backend that is never contacted.
pub fn s3_config() -> StorageConfig {
    StorageConfig {
        endpoint: "http://127.0.0.1:9000".to_string(),
        access_key: "minioadmin".to_string(),
        secret_key: "minioadmin".to_string(),
        region: "us-east-1".to_string(),
        public_url: "http://127.0.0.1:9000".to_string(),
        timeout_seconds: 1,
    }
}

/// Server over the in-memory repository and the real S3 signer.
pub fn create_s3_test_app() -> (TestServer, Arc<InMemoryCompanyRepository>) {
    let repository = Arc::new(InMemoryCompanyRepository::default());
    let storage = Arc::new(S3Storage::new(&s3_config()).unwrap());

    let state = AppState::new(repository.clone(), storage);
    (TestServer::new(router(state)).unwrap(), repository)
}
