//! Downloadable JSON backups of a résumé and their re-import.

use serde_json::Value;
use thiserror::Error;

use crate::models::resume::ResumeRecord;

/// Key whose presence marks a JSON document as a résumé backup.
const REQUIRED_KEY: &str = "experienceEntries";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Could not read the backup file: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid backup file: missing 'experienceEntries'")]
    NotABackup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub file_name: String,
    pub contents: String,
}

/// Serializes the record verbatim (pretty-printed) under a name derived from the owner.
pub fn export(record: &ResumeRecord) -> Result<BackupFile, serde_json::Error> {
    Ok(BackupFile {
        file_name: file_name(record),
        contents: serde_json::to_string_pretty(record)?,
    })
}

pub fn file_name(record: &ResumeRecord) -> String {
    let name = record.name.trim();
    let stem = if name.is_empty() { "untitled" } else { name };
    let stem: String = stem
        .chars()
        .map(|c| match c {
            '/' | '\\' | '"' | ':' | '*' | '?' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    format!("resume-backup-{stem}.json")
}

/// Parses a backup file. Anything that is not a JSON object carrying the
/// experience list is rejected so the caller can leave its state untouched.
pub fn import(text: &str) -> Result<ResumeRecord, BackupError> {
    let value: Value = serde_json::from_str(text)?;
    match value.get(REQUIRED_KEY) {
        Some(entries) if !entries.is_null() => Ok(serde_json::from_value(value)?),
        _ => Err(BackupError::NotABackup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceEntry;

    #[test]
    fn test_export_then_import_restores_record() {
        let mut record = ResumeRecord {
            name: "Erik".to_string(),
            skills: "Rust, SQL".to_string(),
            ..Default::default()
        };
        record.experience_entries.push(ExperienceEntry {
            id: "1700000000000".to_string(),
            company: "Acme".to_string(),
            ..Default::default()
        });

        let file = export(&record).unwrap();
        assert_eq!(file.file_name, "resume-backup-Erik.json");
        assert!(file.contents.contains('\n'));
        assert_eq!(import(&file.contents).unwrap(), record);
    }

    #[test]
    fn test_file_name_without_name() {
        assert_eq!(
            file_name(&ResumeRecord::default()),
            "resume-backup-untitled.json"
        );
    }

    #[test]
    fn test_file_name_strips_path_separators() {
        let record = ResumeRecord {
            name: "a/b".to_string(),
            ..Default::default()
        };
        assert_eq!(file_name(&record), "resume-backup-a-b.json");
    }

    #[test]
    fn test_import_rejects_missing_experience_list() {
        let err = import(r#"{"name":"Erik","educationEntries":[]}"#).unwrap_err();
        assert!(matches!(err, BackupError::NotABackup));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let err = import("{not json").unwrap_err();
        assert!(matches!(err, BackupError::InvalidJson(_)));
    }

    #[test]
    fn test_import_rejects_non_object() {
        assert!(matches!(import("[1, 2]"), Err(BackupError::NotABackup)));
    }

    #[test]
    fn test_import_rejects_wrongly_typed_list() {
        let err = import(r#"{"experienceEntries": "nope"}"#).unwrap_err();
        assert!(matches!(err, BackupError::InvalidJson(_)));
    }

    #[test]
    fn test_import_accepts_empty_experience_list() {
        let record = import(r#"{"experienceEntries": []}"#).unwrap();
        assert!(record.experience_entries.is_empty());
    }
}
