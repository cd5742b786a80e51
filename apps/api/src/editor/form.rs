//! Form state transitions.
//!
//! Every edit is a `FormAction` applied by `reduce`, which never mutates its
//! input: callers compare the returned record with the previous one to
//! detect changes. Invalid positions leave the record untouched.

use serde::{Deserialize, Serialize};

use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Name,
    Role,
    Summary,
    Email,
    Phone,
    Link,
    Slug,
    ThemeColor,
    PhotoUrl,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Role,
    Period,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Course,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryList {
    Experience,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormAction {
    SetField {
        field: ScalarField,
        value: String,
    },
    /// Appends a blank entry. `id` must be fresh for the list (see `EntryIdGenerator`).
    AddEntry {
        list: EntryList,
        id: String,
    },
    RemoveEntry {
        list: EntryList,
        index: usize,
    },
    MoveEntry {
        list: EntryList,
        index: usize,
        direction: Direction,
    },
    UpdateExperience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    UpdateEducation {
        index: usize,
        field: EducationField,
        value: String,
    },
    /// Swaps in a whole record, e.g. a restored backup.
    Replace(ResumeRecord),
    /// Back to the blank starting record.
    Reset,
}

pub fn reduce(current: &ResumeRecord, action: FormAction) -> ResumeRecord {
    let mut next = current.clone();
    match action {
        FormAction::SetField { field, value } => *scalar_mut(&mut next, field) = value,
        FormAction::AddEntry { list, id } => match list {
            EntryList::Experience => next.experience_entries.push(ExperienceEntry::empty(id)),
            EntryList::Education => next.education_entries.push(EducationEntry::empty(id)),
        },
        FormAction::RemoveEntry { list, index } => match list {
            EntryList::Experience => remove_at(&mut next.experience_entries, index),
            EntryList::Education => remove_at(&mut next.education_entries, index),
        },
        FormAction::MoveEntry {
            list,
            index,
            direction,
        } => match list {
            EntryList::Experience => move_entry(&mut next.experience_entries, index, direction),
            EntryList::Education => move_entry(&mut next.education_entries, index, direction),
        },
        FormAction::UpdateExperience {
            index,
            field,
            value,
        } => {
            if let Some(entry) = next.experience_entries.get_mut(index) {
                let slot = match field {
                    ExperienceField::Company => &mut entry.company,
                    ExperienceField::Role => &mut entry.role,
                    ExperienceField::Period => &mut entry.period,
                    ExperienceField::Description => &mut entry.description,
                };
                *slot = value;
            }
        }
        FormAction::UpdateEducation {
            index,
            field,
            value,
        } => {
            if let Some(entry) = next.education_entries.get_mut(index) {
                let slot = match field {
                    EducationField::Institution => &mut entry.institution,
                    EducationField::Course => &mut entry.course,
                    EducationField::Year => &mut entry.year,
                };
                *slot = value;
            }
        }
        FormAction::Replace(record) => next = record,
        FormAction::Reset => next = ResumeRecord::default(),
    }
    next
}

fn scalar_mut(record: &mut ResumeRecord, field: ScalarField) -> &mut String {
    match field {
        ScalarField::Name => &mut record.name,
        ScalarField::Role => &mut record.role,
        ScalarField::Summary => &mut record.summary,
        ScalarField::Email => &mut record.email,
        ScalarField::Phone => &mut record.phone,
        ScalarField::Link => &mut record.link,
        ScalarField::Slug => &mut record.slug,
        ScalarField::ThemeColor => &mut record.theme_color,
        ScalarField::PhotoUrl => &mut record.photo_url,
        ScalarField::Skills => &mut record.skills,
    }
}

fn remove_at<T>(entries: &mut Vec<T>, index: usize) {
    if index < entries.len() {
        entries.remove(index);
    }
}

/// Swaps with the neighbour; the first entry can't go up nor the last down.
fn move_entry<T>(entries: &mut [T], index: usize, direction: Direction) {
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };
    match target {
        Some(target) if index < entries.len() && target < entries.len() => {
            entries.swap(index, target)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_experience(ids: &[&str]) -> ResumeRecord {
        ResumeRecord {
            experience_entries: ids.iter().map(|id| ExperienceEntry::empty(*id)).collect(),
            ..Default::default()
        }
    }

    fn experience_ids(record: &ResumeRecord) -> Vec<&str> {
        record
            .experience_entries
            .iter()
            .map(|e| e.id.as_str())
            .collect()
    }

    fn mv(index: usize, direction: Direction) -> FormAction {
        FormAction::MoveEntry {
            list: EntryList::Experience,
            index,
            direction,
        }
    }

    #[test]
    fn test_set_field_returns_new_record() {
        let before = ResumeRecord::default();
        let after = reduce(
            &before,
            FormAction::SetField {
                field: ScalarField::Name,
                value: "Erik".to_string(),
            },
        );
        assert_eq!(after.name, "Erik");
        assert_eq!(before.name, "");
        assert_ne!(before, after);
    }

    #[test]
    fn test_set_every_scalar_field() {
        let fields = [
            ScalarField::Name,
            ScalarField::Role,
            ScalarField::Summary,
            ScalarField::Email,
            ScalarField::Phone,
            ScalarField::Link,
            ScalarField::Slug,
            ScalarField::ThemeColor,
            ScalarField::PhotoUrl,
            ScalarField::Skills,
        ];
        let mut record = ResumeRecord::default();
        for field in fields {
            record = reduce(
                &record,
                FormAction::SetField {
                    field,
                    value: "x".to_string(),
                },
            );
        }
        let json = serde_json::to_value(&record).unwrap();
        for (key, value) in json.as_object().unwrap() {
            if value.is_string() {
                assert_eq!(value, "x", "field {key} was not set");
            }
        }
    }

    #[test]
    fn test_add_and_remove_entries() {
        let r = reduce(
            &ResumeRecord::default(),
            FormAction::AddEntry {
                list: EntryList::Education,
                id: "42".to_string(),
            },
        );
        assert_eq!(r.education_entries.len(), 2);
        assert_eq!(r.education_entries[1], EducationEntry::empty("42"));

        let r = reduce(
            &r,
            FormAction::RemoveEntry {
                list: EntryList::Education,
                index: 0,
            },
        );
        assert_eq!(r.education_entries, vec![EducationEntry::empty("42")]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let r = with_experience(&["a"]);
        let after = reduce(
            &r,
            FormAction::RemoveEntry {
                list: EntryList::Experience,
                index: 5,
            },
        );
        assert_eq!(after, r);
    }

    #[test]
    fn test_move_swaps_with_neighbour() {
        let r = with_experience(&["a", "b", "c"]);
        assert_eq!(experience_ids(&reduce(&r, mv(1, Direction::Up))), ["b", "a", "c"]);
        assert_eq!(experience_ids(&reduce(&r, mv(1, Direction::Down))), ["a", "c", "b"]);
    }

    #[test]
    fn test_move_at_boundaries_is_identity() {
        let r = with_experience(&["a", "b", "c"]);
        assert_eq!(reduce(&r, mv(0, Direction::Up)), r);
        assert_eq!(reduce(&r, mv(2, Direction::Down)), r);
        assert_eq!(reduce(&r, mv(9, Direction::Up)), r);
        assert_eq!(reduce(&r, mv(usize::MAX, Direction::Down)), r);
    }

    #[test]
    fn test_reorder_sequences_are_permutations() {
        let original = with_experience(&["a", "b", "c", "d", "e"]);
        let mut r = original.clone();
        // Deterministic pseudo-random walk over valid positions
        let mut seed: u64 = 0x9e37_79b9;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let index = (seed >> 33) as usize % 5;
            let direction = if seed & 1 == 0 { Direction::Up } else { Direction::Down };
            r = reduce(&r, mv(index, direction));
        }
        let mut ids = experience_ids(&r);
        ids.sort_unstable();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
        assert_eq!(r.experience_entries.len(), original.experience_entries.len());
    }

    #[test]
    fn test_update_entry_fields() {
        let r = with_experience(&["a", "b"]);
        let r = reduce(
            &r,
            FormAction::UpdateExperience {
                index: 1,
                field: ExperienceField::Company,
                value: "Acme".to_string(),
            },
        );
        assert_eq!(r.experience_entries[1].company, "Acme");
        assert_eq!(r.experience_entries[0].company, "");

        let r = reduce(
            &r,
            FormAction::UpdateEducation {
                index: 0,
                field: EducationField::Year,
                value: "2019".to_string(),
            },
        );
        assert_eq!(r.education_entries[0].year, "2019");
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let r = with_experience(&["a"]);
        let after = reduce(
            &r,
            FormAction::UpdateExperience {
                index: 3,
                field: ExperienceField::Role,
                value: "Lead".to_string(),
            },
        );
        assert_eq!(after, r);
    }

    #[test]
    fn test_replace_and_reset() {
        let imported = with_experience(&["x"]);
        let r = reduce(&ResumeRecord::default(), FormAction::Replace(imported.clone()));
        assert_eq!(r, imported);
        assert_eq!(reduce(&r, FormAction::Reset), ResumeRecord::default());
    }

    #[test]
    fn test_action_json_shape() {
        let action: FormAction = serde_json::from_str(
            r#"{"action":"move_entry","list":"experience","index":1,"direction":"up"}"#,
        )
        .unwrap();
        assert_eq!(action, mv(1, Direction::Up));
    }
}
