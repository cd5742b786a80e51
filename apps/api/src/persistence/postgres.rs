use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeRow, ResumeWrite};
use crate::persistence::store::{slug_taken, ResumeStore};

/// PostgreSQL-backed store over the `resumes` table.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        PgResumeStore { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<ResumeRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ResumeRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn insert(&self, user_id: &str, write: &ResumeWrite) -> Result<ResumeRow, AppError> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, user_id, content, slug, theme_color, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&write.content)
        .bind(&write.slug)
        .bind(&write.theme_color)
        .bind(&write.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, write))
    }

    async fn update(&self, id: Uuid, write: &ResumeWrite) -> Result<ResumeRow, AppError> {
        sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET content = $2, slug = $3, theme_color = $4, photo_url = $5, updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&write.content)
        .bind(&write.slug)
        .bind(&write.theme_color)
        .bind(&write.photo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, write))
    }
}

/// A unique violation on `slug` means another identity owns the link name.
fn map_unique_violation(err: sqlx::Error, write: &ResumeWrite) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some("resumes_slug_key") {
            return slug_taken(write.slug.as_deref());
        }
    }
    AppError::Database(err)
}
