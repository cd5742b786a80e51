use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::wire::PublicResume;
use crate::public::lookup::find_by_slug;
use crate::render::{page_metadata, render_resume, Document, PageMetadata};
use crate::state::AppState;

async fn lookup(state: &AppState, slug: &str) -> Result<PublicResume, AppError> {
    find_by_slug(state.store.as_ref(), slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume is published at '{slug}'")))
}

/// GET /api/v1/public/:slug
pub async fn handle_public_resume(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PublicResume>, AppError> {
    Ok(Json(lookup(&state, &slug).await?))
}

/// GET /api/v1/public/:slug/document
pub async fn handle_public_document(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Document>, AppError> {
    let public = lookup(&state, &slug).await?;
    Ok(Json(render_resume(&public.resume)))
}

/// GET /api/v1/public/:slug/meta
pub async fn handle_public_metadata(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageMetadata>, AppError> {
    let public = lookup(&state, &slug).await?;
    Ok(Json(page_metadata(&public.resume)))
}
