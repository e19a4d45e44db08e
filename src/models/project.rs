use std::fmt;

use sqlx::types::BigDecimal;

/// A project row as stored. `id` is assigned by the store on insert.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub estimated_hours: Option<BigDecimal>,
    pub actual_hours: Option<BigDecimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

/// A project that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub estimated_hours: Option<BigDecimal>,
    pub actual_hours: Option<BigDecimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

impl NewProject {
    #[cfg(test)]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            estimated_hours: None,
            actual_hours: None,
            difficulty: None,
            notes: None,
        }
    }

    /// Attach the id handed back by the store.
    pub fn with_id(self, id: i32) -> Project {
        Project {
            id,
            name: self.name,
            estimated_hours: self.estimated_hours,
            actual_hours: self.actual_hours,
            difficulty: self.difficulty,
            notes: self.notes,
        }
    }
}

/// Renders an optional column the way the menu banner shows it.
pub(crate) struct OrNull<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project(id={}, name={}, estimated_hours={}, actual_hours={}, difficulty={}, notes={})",
            self.id,
            self.name,
            OrNull(&self.estimated_hours),
            OrNull(&self.actual_hours),
            OrNull(&self.difficulty),
            OrNull(&self.notes),
        )
    }
}
