use sqlx::types::BigDecimal;

use crate::error::AppError;
use crate::models::Project;

/// What the user asked to do with one column during an update.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldEdit<T> {
    /// Blank input, the stored value stays.
    #[default]
    Keep,
    /// Explicitly emptied.
    Clear,
    Set(T),
}

impl<T> FieldEdit<T> {
    pub fn resolve(self, current: Option<T>) -> Option<T> {
        match self {
            FieldEdit::Keep => current,
            FieldEdit::Clear => None,
            FieldEdit::Set(value) => Some(value),
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, FieldEdit::Keep)
    }
}

/// One edit per editable column of a project.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectPatch {
    pub name: FieldEdit<String>,
    pub estimated_hours: FieldEdit<BigDecimal>,
    pub actual_hours: FieldEdit<BigDecimal>,
    pub difficulty: FieldEdit<i32>,
    pub notes: FieldEdit<String>,
}

impl ProjectPatch {
    /// Merge the edits over `current`, producing the full replacement row.
    ///
    /// The id always comes from `current`. The name is required, so clearing
    /// it is rejected.
    pub fn apply(self, current: &Project) -> Result<Project, AppError> {
        let name = match self.name {
            FieldEdit::Keep => current.name.clone(),
            FieldEdit::Set(name) => name,
            FieldEdit::Clear => {
                return Err(AppError::validation("The project name cannot be cleared"));
            }
        };

        Ok(Project {
            id: current.id,
            name,
            estimated_hours: self.estimated_hours.resolve(current.estimated_hours.clone()),
            actual_hours: self.actual_hours.resolve(current.actual_hours.clone()),
            difficulty: self.difficulty.resolve(current.difficulty),
            notes: self.notes.resolve(current.notes.clone()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_keep()
            && self.estimated_hours.is_keep()
            && self.actual_hours.is_keep()
            && self.difficulty.is_keep()
            && self.notes.is_keep()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_matches::assert_matches;

    use super::*;

    fn hours(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    fn stored() -> Project {
        Project {
            id: 11,
            name: "Garden bed".to_string(),
            estimated_hours: Some(hours("4.00")),
            actual_hours: Some(hours("5.25")),
            difficulty: Some(2),
            notes: Some("raised, cedar".to_string()),
        }
    }

    #[test]
    fn empty_patch_reproduces_the_row() {
        let patch = ProjectPatch::default();
        assert!(patch.is_empty());

        let merged = patch.apply(&stored()).unwrap();

        assert_eq!(merged, stored());
    }

    #[test]
    fn each_set_field_is_independent_of_the_others() {
        let patch = ProjectPatch {
            actual_hours: FieldEdit::Set(hours("6.00")),
            notes: FieldEdit::Set("finished".to_string()),
            ..ProjectPatch::default()
        };

        let merged = patch.apply(&stored()).unwrap();

        assert_eq!(merged.id, 11);
        assert_eq!(merged.name, "Garden bed");
        assert_eq!(merged.estimated_hours, Some(hours("4.00")));
        assert_eq!(merged.actual_hours, Some(hours("6.00")));
        assert_eq!(merged.difficulty, Some(2));
        assert_eq!(merged.notes.as_deref(), Some("finished"));
    }

    #[test]
    fn clear_empties_optional_columns() {
        let patch = ProjectPatch {
            estimated_hours: FieldEdit::Clear,
            difficulty: FieldEdit::Clear,
            ..ProjectPatch::default()
        };

        let merged = patch.apply(&stored()).unwrap();

        assert_eq!(merged.estimated_hours, None);
        assert_eq!(merged.difficulty, None);
        assert_eq!(merged.actual_hours, Some(hours("5.25")));
    }

    #[test]
    fn clearing_the_name_is_rejected() {
        let patch = ProjectPatch {
            name: FieldEdit::Clear,
            ..ProjectPatch::default()
        };

        assert_matches!(patch.apply(&stored()), Err(AppError::Validation(_)));
    }

    #[test]
    fn out_of_range_difficulty_passes_through() {
        let patch = ProjectPatch {
            difficulty: FieldEdit::Set(9),
            ..ProjectPatch::default()
        };

        assert_eq!(patch.apply(&stored()).unwrap().difficulty, Some(9));
    }
}
