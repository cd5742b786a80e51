use std::sync::Arc;

use crate::config::Config;
use crate::persistence::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Résumé storage: PostgreSQL when `DATABASE_URL` is set, in-memory otherwise.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}
