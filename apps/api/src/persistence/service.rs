//! Identity-keyed save/load on top of any `ResumeStore`.
//!
//! Column rules on every write:
//! - `content` is always the full serialized record
//! - `slug` and `photo_url` are only replaced by non-empty incoming values,
//!   copied exactly as they appear in the blob
//! - `theme_color` is always replaced

use tracing::info;

use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeRow, ResumeWrite};
use crate::models::wire::SaveOutcome;
use crate::persistence::store::ResumeStore;

/// Creates the caller's row on first save, otherwise overwrites it.
pub async fn save(
    store: &dyn ResumeStore,
    user_id: &str,
    record: &ResumeRecord,
) -> Result<SaveOutcome, AppError> {
    match store.find_by_user(user_id).await? {
        Some(existing) => {
            let write = resolve_write(Some(&existing), record)?;
            store.update(existing.id, &write).await?;
            info!(user_id, slug = ?write.slug, "Resume updated");
            Ok(SaveOutcome::Updated)
        }
        None => {
            let write = resolve_write(None, record)?;
            store.insert(user_id, &write).await?;
            info!(user_id, slug = ?write.slug, "Resume created");
            Ok(SaveOutcome::Created)
        }
    }
}

/// Returns `None` when the identity has never saved.
pub async fn load(store: &dyn ResumeStore, user_id: &str) -> Result<Option<ResumeRecord>, AppError> {
    match store.find_by_user(user_id).await? {
        Some(row) => Ok(Some(row.record()?)),
        None => Ok(None),
    }
}

/// Computes the column values for a save given the row already stored, if any.
pub fn resolve_write(
    existing: Option<&ResumeRow>,
    record: &ResumeRecord,
) -> Result<ResumeWrite, AppError> {
    let existing_slug = existing.and_then(|row| row.slug.clone());
    let existing_photo = existing.and_then(|row| row.photo_url.clone());

    Ok(ResumeWrite {
        content: serde_json::to_string(record)?,
        slug: non_empty(&record.slug).or(existing_slug),
        theme_color: record.theme_color.clone(),
        photo_url: non_empty(&record.photo_url).or(existing_photo),
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
