use std::io::Write;

use crate::error::AppError;
use crate::models::Project;

/// Prints the id/name listing shown before select and delete.
pub fn render_projects<W: Write>(out: &mut W, projects: &[Project]) -> Result<(), AppError> {
    writeln!(out, "\nProjects:")?;
    for project in projects {
        writeln!(out, " {}: {}", project.id, project.name)?;
    }
    Ok(())
}
