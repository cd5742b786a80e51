use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Theme color applied when a record carries none.
pub const DEFAULT_THEME_COLOR: &str = "#2c3e50";

/// The full résumé a user edits, persisted verbatim as the `content` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    // Personal
    pub name: String,
    pub role: String,
    pub summary: String,

    // Contact
    pub email: String,
    pub phone: String,
    pub link: String,

    // Presentation
    pub slug: String,
    pub theme_color: String,
    /// Data URL or remote URL of the profile photo.
    pub photo_url: String,
    /// Comma-separated free text.
    pub skills: String,

    pub experience_entries: Vec<ExperienceEntry>,
    pub education_entries: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub course: String,
    pub year: String,
}

impl ExperienceEntry {
    pub fn empty(id: impl Into<String>) -> Self {
        ExperienceEntry {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl EducationEntry {
    pub fn empty(id: impl Into<String>) -> Self {
        EducationEntry {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Default for ResumeRecord {
    /// Starting point for a brand new user: one blank entry per list.
    fn default() -> Self {
        ResumeRecord {
            name: String::new(),
            role: String::new(),
            summary: String::new(),
            email: String::new(),
            phone: String::new(),
            link: String::new(),
            slug: String::new(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            photo_url: String::new(),
            skills: String::new(),
            experience_entries: vec![ExperienceEntry::empty("1")],
            education_entries: vec![EducationEntry::empty("1")],
        }
    }
}

/// One row of the `resumes` table. `slug`, `theme_color` and `photo_url`
/// duplicate fields of `content` so lookups need not deserialize the blob.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: String,
    pub content: String,
    pub slug: Option<String>,
    pub theme_color: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeRow {
    pub fn record(&self) -> Result<ResumeRecord, serde_json::Error> {
        serde_json::from_str(&self.content)
    }
}

/// Column values written on save, after the keep-existing rules are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeWrite {
    pub content: String,
    pub slug: Option<String>,
    pub theme_color: String,
    pub photo_url: Option<String>,
}
