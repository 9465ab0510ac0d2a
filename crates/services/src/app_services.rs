use std::sync::Arc;

use academy_core::{Catalog, Clock};
use storage::repository::Storage;

use crate::analysis_service::AnalysisService;
use crate::auth_service::{AuthConfig, AuthService};
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    auth: Arc<AuthService>,
    progress: Arc<ProgressService>,
    analysis: Arc<AnalysisService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, with auth and analysis
    /// configuration drawn from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(storage, clock, AuthConfig::from_env()))
    }

    /// Build services over any storage backend.
    #[must_use]
    pub fn new(storage: Storage, clock: Clock, auth_config: AuthConfig) -> Self {
        let catalog = Arc::new(Catalog::standard());
        let auth = Arc::new(AuthService::new(
            auth_config,
            clock,
            Arc::clone(&storage.sessions),
        ));
        let progress = Arc::new(ProgressService::new(
            Arc::clone(&catalog),
            clock,
            Arc::clone(&storage.progress),
            Arc::clone(&storage.sections),
        ));
        let analysis = Arc::new(AnalysisService::from_env());

        Self {
            catalog,
            auth,
            progress,
            analysis,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn analysis(&self) -> Arc<AnalysisService> {
        Arc::clone(&self.analysis)
    }
}
