//! Request/response bodies shared by the HTTP handlers and the editor's HTTP client.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Created,
    Updated,
}

impl SaveOutcome {
    pub fn message(self) -> &'static str {
        match self {
            SaveOutcome::Created => "Resume created!",
            SaveOutcome::Updated => "Resume updated!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub outcome: SaveOutcome,
    pub message: String,
}

impl From<SaveOutcome> for SaveResponse {
    fn from(outcome: SaveOutcome) -> Self {
        SaveResponse {
            outcome,
            message: outcome.message().to_string(),
        }
    }
}

/// `resume` is `None` for identities that never saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResponse {
    pub resume: Option<ResumeRecord>,
}

/// Public view of a résumé resolved by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicResume {
    pub resume: ResumeRecord,
    pub theme_color: String,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub photo_url: String,
}
