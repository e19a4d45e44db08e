use tracing::info;

use crate::db::{ProjectStore, RowOutcome};
use crate::error::AppError;
use crate::models::{NewProject, Project};

/// Existence checks around a [`ProjectStore`].
pub struct ProjectService<S> {
    store: S,
}

impl<S: ProjectStore> ProjectService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn add(&self, project: &NewProject) -> Result<Project, AppError> {
        let project = self.store.insert(project).await?;
        info!(id = project.id, "project created");
        Ok(project)
    }

    pub async fn fetch_all(&self) -> Result<Vec<Project>, AppError> {
        self.store.fetch_all().await
    }

    pub async fn fetch_by_id(&self, id: i32) -> Result<Project, AppError> {
        self.store
            .fetch_by_id(id)
            .await?
            .ok_or(AppError::NotFound { id })
    }

    /// Overwrite every column of the row with `project.id`.
    pub async fn update(&self, project: &Project) -> Result<(), AppError> {
        match self.store.update(project).await? {
            RowOutcome::Applied => {
                info!(id = project.id, "project updated");
                Ok(())
            }
            RowOutcome::Missing => Err(AppError::NotFound { id: project.id }),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        match self.store.delete(id).await? {
            RowOutcome::Applied => {
                info!(id, "project deleted");
                Ok(())
            }
            RowOutcome::Missing => Err(AppError::NotFound { id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use assert_matches::assert_matches;
    use sqlx::types::BigDecimal;

    use super::*;
    use crate::db::MemoryStore;

    fn service() -> ProjectService<MemoryStore> {
        ProjectService::new(MemoryStore::default())
    }

    #[tokio::test]
    async fn add_then_fetch_round_trips_through_the_store() {
        let service = service();
        let mut draft = NewProject::named("Migrate DB");
        draft.difficulty = Some(3);

        let created = service.add(&draft).await.unwrap();
        let fetched = service.fetch_by_id(created.id).await.unwrap();

        assert_eq!(fetched.name, "Migrate DB");
        assert_eq!(fetched.difficulty, Some(3));
        assert!(fetched.estimated_hours.is_none());
        assert!(fetched.actual_hours.is_none());
        assert!(fetched.notes.is_none());
    }

    #[tokio::test]
    async fn fetch_of_unknown_id_is_not_found() {
        assert_matches!(
            service().fetch_by_id(5).await,
            Err(AppError::NotFound { id: 5 })
        );
    }

    #[tokio::test]
    async fn update_overwrites_the_whole_row() {
        let service = service();
        let mut created = service.add(&NewProject::named("Kiln")).await.unwrap();
        created.actual_hours = Some(BigDecimal::from_str("8.50").unwrap());
        created.notes = Some("fired twice".to_string());

        service.update(&created).await.unwrap();

        assert_eq!(service.fetch_by_id(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_of_unknown_id_persists_nothing() {
        let service = service();
        let existing = service.add(&NewProject::named("Kiln")).await.unwrap();
        let ghost = NewProject::named("Ghost").with_id(9999);

        assert_matches!(
            service.update(&ghost).await,
            Err(AppError::NotFound { id: 9999 })
        );
        assert_eq!(service.fetch_all().await.unwrap(), vec![existing]);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_removes_nothing() {
        let service = service();
        service.add(&NewProject::named("Kiln")).await.unwrap();

        assert_matches!(service.delete(9999).await, Err(AppError::NotFound { id: 9999 }));
        assert_eq!(service.store().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let service = service();
        let created = service.add(&NewProject::named("Kiln")).await.unwrap();

        service.delete(created.id).await.unwrap();

        assert!(service.store().is_empty());
        assert_matches!(
            service.delete(created.id).await,
            Err(AppError::NotFound { .. })
        );
    }
}
