use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeWrite};
use crate::persistence::store::{slug_taken, ResumeStore};

/// In-process store keyed by user identity. Used when no database is configured.
#[derive(Default)]
pub struct MemoryResumeStore {
    rows: RwLock<HashMap<String, ResumeRow>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

fn slug_owned_elsewhere(rows: &HashMap<String, ResumeRow>, id: Uuid, slug: Option<&str>) -> bool {
    let Some(slug) = slug else {
        return false;
    };
    rows.values()
        .any(|row| row.id != id && row.slug.as_deref() == Some(slug))
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<ResumeRow>, AppError> {
        Ok(self.rows.read().await.get(user_id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ResumeRow>, AppError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|row| row.slug.as_deref() == Some(slug))
            .cloned())
    }

    async fn insert(&self, user_id: &str, write: &ResumeWrite) -> Result<ResumeRow, AppError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(user_id) {
            return Err(AppError::Conflict(format!(
                "A resume already exists for user '{user_id}'"
            )));
        }
        let id = Uuid::new_v4();
        if slug_owned_elsewhere(&rows, id, write.slug.as_deref()) {
            return Err(slug_taken(write.slug.as_deref()));
        }

        let now = Utc::now();
        let row = ResumeRow {
            id,
            user_id: user_id.to_string(),
            content: write.content.clone(),
            slug: write.slug.clone(),
            theme_color: write.theme_color.clone(),
            photo_url: write.photo_url.clone(),
            created_at: now,
            updated_at: now,
        };
        rows.insert(user_id.to_string(), row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, write: &ResumeWrite) -> Result<ResumeRow, AppError> {
        let mut rows = self.rows.write().await;
        if slug_owned_elsewhere(&rows, id, write.slug.as_deref()) {
            return Err(slug_taken(write.slug.as_deref()));
        }
        let row = rows
            .values_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

        row.content = write.content.clone();
        row.slug = write.slug.clone();
        row.theme_color = write.theme_color.clone();
        row.photo_url = write.photo_url.clone();
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}
