use std::sync::Arc;

use academy_core::Catalog;
use services::{AnalysisService, AuthService, ProgressService};

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn auth(&self) -> Arc<AuthService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn analysis(&self) -> Arc<AnalysisService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    auth: Arc<AuthService>,
    progress: Arc<ProgressService>,
    analysis: Arc<AnalysisService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            auth: app.auth(),
            progress: app.progress(),
            analysis: app.analysis(),
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
