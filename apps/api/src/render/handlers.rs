use axum::Json;

use crate::models::resume::ResumeRecord;
use crate::render::{render_resume, Document};

/// POST /api/v1/render
///
/// Live preview: renders the posted record without storing it.
pub async fn handle_render(Json(record): Json<ResumeRecord>) -> Json<Document> {
    Json(render_resume(&record))
}
