use std::io::{BufRead, Write};

use crate::error::AppError;
use crate::models::{NewProject, OrNull, Project, ProjectPatch};
use crate::ui::console::Console;

/// Prompts for every column of a new project. Only the name is required.
pub fn read_new_project<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<NewProject, AppError> {
    let name = console.read_string("Enter the project name")?;
    let estimated_hours = console.read_decimal("Enter the estimated hours")?;
    let actual_hours = console.read_decimal("Enter the actual hours")?;
    let difficulty = console.read_int("Enter the project difficulty (1-5)")?;
    let notes = console.read_string("Enter the project notes")?;

    let name = name.ok_or_else(|| AppError::validation("A project name is required"))?;

    Ok(NewProject {
        name,
        estimated_hours,
        actual_hours,
        difficulty,
        notes,
    })
}

/// Prompts for each editable column, showing the stored value in brackets.
///
/// The first malformed reply aborts the whole edit.
pub fn read_project_patch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    current: &Project,
) -> Result<ProjectPatch, AppError> {
    writeln!(console.out(), "\nPress Enter to keep a value, or '-' to clear it.")?;

    Ok(ProjectPatch {
        name: console.read_string_edit(&format!("Enter the project name [{}]", current.name))?,
        estimated_hours: console.read_decimal_edit(&format!(
            "Enter the estimated hours [{}]",
            OrNull(&current.estimated_hours)
        ))?,
        actual_hours: console.read_decimal_edit(&format!(
            "Enter the actual hours [{}]",
            OrNull(&current.actual_hours)
        ))?,
        difficulty: console.read_int_edit(&format!(
            "Enter the project difficulty (1-5) [{}]",
            OrNull(&current.difficulty)
        ))?,
        notes: console.read_string_edit(&format!(
            "Enter the project notes [{}]",
            OrNull(&current.notes)
        ))?,
    })
}
