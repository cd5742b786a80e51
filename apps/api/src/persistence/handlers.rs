use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::backup;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::models::wire::{LoadResponse, PhotoResponse, SaveResponse, ShareResponse};
use crate::persistence::identity::CallerIdentity;
use crate::persistence::service;
use crate::photo;
use crate::share;
use crate::state::AppState;

/// Multipart field carrying the uploaded photo.
const PHOTO_FIELD: &str = "photo";

/// GET /api/v1/resume
pub async fn handle_load(
    State(state): State<AppState>,
    identity: CallerIdentity,
) -> Result<Json<LoadResponse>, AppError> {
    let resume = service::load(state.store.as_ref(), identity.as_str()).await?;
    Ok(Json(LoadResponse { resume }))
}

/// PUT /api/v1/resume
pub async fn handle_save(
    State(state): State<AppState>,
    identity: CallerIdentity,
    Json(record): Json<ResumeRecord>,
) -> Result<Json<SaveResponse>, AppError> {
    let outcome = service::save(state.store.as_ref(), identity.as_str(), &record).await?;
    Ok(Json(SaveResponse::from(outcome)))
}

/// GET /api/v1/resume/backup
///
/// Downloads the stored record as a JSON backup file.
pub async fn handle_download_backup(
    State(state): State<AppState>,
    identity: CallerIdentity,
) -> Result<impl IntoResponse, AppError> {
    let record = service::load(state.store.as_ref(), identity.as_str())
        .await?
        .ok_or_else(|| AppError::NotFound("No saved resume to back up".to_string()))?;
    let file = backup::export(&record)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.contents,
    ))
}

/// POST /api/v1/resume/backup/import
///
/// Validates a backup file and returns the record it contains. Nothing is stored.
pub async fn handle_import_backup(body: String) -> Result<Json<ResumeRecord>, AppError> {
    backup::import(&body)
        .map(Json)
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// GET /api/v1/resume/share
pub async fn handle_share(
    State(state): State<AppState>,
    identity: CallerIdentity,
) -> Result<Json<ShareResponse>, AppError> {
    let slug = state
        .store
        .find_by_user(identity.as_str())
        .await?
        .and_then(|row| row.slug)
        .unwrap_or_default();

    let url = share::share_link(&state.config.public_base_url, &slug)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(Json(ShareResponse { url }))
}

/// POST /api/v1/resume/photo
///
/// Accepts a multipart `photo` field and returns it as an inline photo reference.
pub async fn handle_upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PhotoResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let photo_url = photo::to_data_url(&content_type, &bytes, state.config.max_photo_bytes)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        info!(size = bytes.len(), content_type = %content_type, "Photo uploaded");
        return Ok(Json(PhotoResponse { photo_url }));
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{PHOTO_FIELD}'"
    )))
}
