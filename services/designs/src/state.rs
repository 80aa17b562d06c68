use std::path::PathBuf;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::infra::artifacts::FsArtifactStore;
use crate::infra::db::{DbCatalogRepository, DbDesignRepository};
use crate::infra::random::ThreadRandomSource;
use crate::infra::reference::HttpReferenceImageFetcher;
use crate::infra::synthesis::HttpSynthesisClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http: reqwest::Client,
    pub jwt_secret: String,
    pub synthesis_url: String,
    pub synthesis_api_key: String,
    pub synthesis_model: String,
    pub artifact_root: PathBuf,
    pub upload_root: PathBuf,
    pub remote_timeout: Duration,
}

impl AppState {
    pub fn catalog_repo(&self) -> DbCatalogRepository {
        DbCatalogRepository {
            db: self.db.clone(),
        }
    }

    pub fn design_repo(&self) -> DbDesignRepository {
        DbDesignRepository {
            db: self.db.clone(),
        }
    }

    pub fn reference_fetcher(&self) -> HttpReferenceImageFetcher {
        HttpReferenceImageFetcher {
            http: self.http.clone(),
            timeout: self.remote_timeout,
        }
    }

    pub fn synthesis_client(&self) -> HttpSynthesisClient {
        HttpSynthesisClient {
            http: self.http.clone(),
            url: self.synthesis_url.clone(),
            api_key: self.synthesis_api_key.clone(),
            model: self.synthesis_model.clone(),
            timeout: self.remote_timeout,
        }
    }

    pub fn artifact_store(&self) -> FsArtifactStore {
        FsArtifactStore {
            root: self.artifact_root.clone(),
        }
    }

    pub fn random_source(&self) -> ThreadRandomSource {
        ThreadRandomSource
    }
}
