use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeWrite};

/// Row-level access to stored résumés. Backends enforce `user_id` and `slug`
/// uniqueness and report a taken slug as `AppError::Conflict`.
///
/// Carried in `AppState` as `Arc<dyn ResumeStore>`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<ResumeRow>, AppError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ResumeRow>, AppError>;

    async fn insert(&self, user_id: &str, write: &ResumeWrite) -> Result<ResumeRow, AppError>;

    async fn update(&self, id: Uuid, write: &ResumeWrite) -> Result<ResumeRow, AppError>;
}

pub(crate) fn slug_taken(slug: Option<&str>) -> AppError {
    match slug {
        Some(slug) => AppError::Conflict(format!("The link name '{slug}' is already taken")),
        None => AppError::Conflict("The link name is already taken".to_string()),
    }
}
