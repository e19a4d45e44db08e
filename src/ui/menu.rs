use std::io::Write;

use crate::app::Selection;
use crate::error::AppError;

pub const OPERATIONS: [&str; 5] = [
    "1) Add a project",
    "2) List projects",
    "3) Select a project",
    "4) Update project details",
    "5) Delete a project",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    AddProject,
    ListProjects,
    SelectProject,
    UpdateProject,
    DeleteProject,
    Invalid(i32),
}

impl MenuAction {
    /// Map the menu reply. No reply means the user wants to leave.
    pub fn from_selection(selection: Option<i32>) -> Self {
        match selection {
            None => MenuAction::Exit,
            Some(1) => MenuAction::AddProject,
            Some(2) => MenuAction::ListProjects,
            Some(3) => MenuAction::SelectProject,
            Some(4) => MenuAction::UpdateProject,
            Some(5) => MenuAction::DeleteProject,
            Some(other) => MenuAction::Invalid(other),
        }
    }
}

pub fn render_menu<W: Write>(out: &mut W, selection: &Selection) -> Result<(), AppError> {
    writeln!(out, "\nThese are the available selections. Press the Enter key to quit:")?;
    for line in OPERATIONS {
        writeln!(out, "   {line}")?;
    }

    match selection.project() {
        None => writeln!(out, "\nYou are not working with a project.")?,
        Some(project) => writeln!(out, "\nYou are working with project: {project}")?,
    }

    Ok(())
}
