use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

const DESCRIPTION_CHARS: usize = 160;

/// Head metadata for a public résumé page (title, description, Open Graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub og_title: String,
    pub og_description: String,
    pub og_type: String,
}

pub fn document_title(record: &ResumeRecord) -> String {
    match record.name.trim() {
        "" => "Professional Resume".to_string(),
        name => format!("Resume of {name}"),
    }
}

pub fn page_metadata(record: &ResumeRecord) -> PageMetadata {
    let summary = record.summary.trim();
    let description = if summary.is_empty() {
        "See the complete professional resume.".to_string()
    } else {
        let truncated: String = summary.chars().take(DESCRIPTION_CHARS).collect();
        format!("{truncated}...")
    };

    let name = record.name.trim();
    let og_description = if name.is_empty() {
        "See this professional's experience.".to_string()
    } else {
        format!("See the professional experience of {name}.")
    };

    PageMetadata {
        title: document_title(record),
        description,
        og_title: document_title(record),
        og_description,
        og_type: "profile".to_string(),
    }
}
