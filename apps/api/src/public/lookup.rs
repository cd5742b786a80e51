use crate::errors::AppError;
use crate::models::wire::PublicResume;
use crate::persistence::ResumeStore;

/// Resolves a public slug. The duplicated theme color and photo columns are
/// returned alongside the record; the owner's identity never is.
pub async fn find_by_slug(
    store: &dyn ResumeStore,
    slug: &str,
) -> Result<Option<PublicResume>, AppError> {
    let slug = slug.trim();
    if slug.is_empty() {
        return Ok(None);
    }
    let Some(row) = store.find_by_slug(slug).await? else {
        return Ok(None);
    };

    Ok(Some(PublicResume {
        resume: row.record()?,
        theme_color: row.theme_color,
        photo_url: row.photo_url,
    }))
}
