use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::db::ProjectStore;
use crate::error::AppError;
use crate::models::Project;
use crate::service::ProjectService;
use crate::ui::console::Console;
use crate::ui::menu::{render_menu, MenuAction};
use crate::ui::project_wizard::{read_new_project, read_project_patch};
use crate::ui::projects::render_projects;

/// The project the menu is currently working with.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Empty,
    Project(Project),
}

impl Selection {
    pub fn project(&self) -> Option<&Project> {
        match self {
            Selection::Empty => None,
            Selection::Project(project) => Some(project),
        }
    }

    pub fn is_selected(&self, id: i32) -> bool {
        self.project().is_some_and(|project| project.id == id)
    }

    /// Drop the selection if it refers to a project that no longer exists.
    pub fn forget(&mut self, id: i32) {
        if self.is_selected(id) {
            *self = Selection::Empty;
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive menu: one action per loop iteration.
pub struct App<S, R, W> {
    service: ProjectService<S>,
    console: Console<R, W>,
}

impl<S: ProjectStore, R: BufRead, W: Write> App<S, R, W> {
    pub fn new(service: ProjectService<S>, console: Console<R, W>) -> Self {
        Self { service, console }
    }

    #[cfg(test)]
    pub fn into_service(self) -> ProjectService<S> {
        self.service
    }

    /// Runs until the user leaves the menu and returns the final selection.
    ///
    /// Operation failures are reported and the loop carries on. Only console
    /// failures end it early.
    pub async fn run(&mut self) -> Result<Selection, AppError> {
        let mut selection = Selection::Empty;

        loop {
            match self.step(&mut selection).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(AppError::Io(err)) => return Err(AppError::Io(err)),
                Err(err) => {
                    warn!(error = %err, "operation failed");
                    writeln!(self.console.out(), "\nError: {err} Try again.")?;
                }
            }
        }

        Ok(selection)
    }

    async fn step(&mut self, selection: &mut Selection) -> Result<Flow, AppError> {
        render_menu(self.console.out(), selection)?;
        let action = MenuAction::from_selection(self.console.read_int("Enter a menu selection")?);
        debug!(?action, "menu selection");

        match action {
            MenuAction::Exit => {
                writeln!(self.console.out(), "Exiting the menu.")?;
                return Ok(Flow::Exit);
            }
            MenuAction::AddProject => self.create_project().await?,
            MenuAction::ListProjects => self.list_projects().await?,
            MenuAction::SelectProject => self.select_project(selection).await?,
            MenuAction::UpdateProject => self.update_project(selection).await?,
            MenuAction::DeleteProject => self.delete_project(selection).await?,
            MenuAction::Invalid(choice) => {
                writeln!(self.console.out(), "\n{choice} is not a valid selection. Try again.")?;
            }
        }

        Ok(Flow::Continue)
    }

    pub async fn create_project(&mut self) -> Result<(), AppError> {
        let draft = read_new_project(&mut self.console)?;
        let project = self.service.add(&draft).await?;
        writeln!(self.console.out(), "You have successfully created project: {project}")?;
        Ok(())
    }

    pub async fn list_projects(&mut self) -> Result<(), AppError> {
        let projects = self.service.fetch_all().await?;
        render_projects(self.console.out(), &projects)
    }

    /// Replaces the selection with the chosen project. The old selection is
    /// cleared first, so a failed lookup leaves nothing selected.
    pub async fn select_project(&mut self, selection: &mut Selection) -> Result<(), AppError> {
        self.list_projects().await?;
        let id = self.read_project_id("Enter a project ID to select a project")?;

        *selection = Selection::Empty;
        *selection = Selection::Project(self.service.fetch_by_id(id).await?);
        Ok(())
    }

    /// Merges the user's edits over the selected project and stores the
    /// result, then reloads the selection from the store.
    pub async fn update_project(&mut self, selection: &mut Selection) -> Result<(), AppError> {
        let Some(current) = selection.project() else {
            writeln!(self.console.out(), "\nPlease select a project.")?;
            return Ok(());
        };

        let patch = read_project_patch(&mut self.console, current)?;
        debug!(id = current.id, unchanged = patch.is_empty(), "applying project edits");
        let updated = patch.apply(current)?;
        self.service.update(&updated).await?;

        *selection = Selection::Project(self.service.fetch_by_id(updated.id).await?);
        Ok(())
    }

    pub async fn delete_project(&mut self, selection: &mut Selection) -> Result<(), AppError> {
        self.list_projects().await?;
        let id = self.read_project_id("Enter a project ID to delete project")?;

        self.service.delete(id).await?;
        writeln!(self.console.out(), "Project {id} has been deleted successfully.")?;

        selection.forget(id);
        Ok(())
    }

    fn read_project_id(&mut self, prompt: &str) -> Result<i32, AppError> {
        self.console
            .read_int(prompt)?
            .ok_or_else(|| AppError::validation("A project ID is required"))
    }
}
