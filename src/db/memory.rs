use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::db::{ProjectStore, RowOutcome};
use crate::error::AppError;
use crate::models::{NewProject, Project};

/// In-process project table. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<Table>,
}

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Project>,
}

impl MemoryStore {
    fn table(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.table().rows.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProjectStore for MemoryStore {
    async fn insert(&self, project: &NewProject) -> Result<Project, AppError> {
        let mut table = self.table();
        table.last_id += 1;
        let stored = project.clone().with_id(table.last_id);
        debug!(id = stored.id, "inserting project in memory");
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn fetch_all(&self) -> Result<Vec<Project>, AppError> {
        Ok(self.table().rows.values().cloned().collect())
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        Ok(self.table().rows.get(&id).cloned())
    }

    async fn update(&self, project: &Project) -> Result<RowOutcome, AppError> {
        let mut table = self.table();
        match table.rows.get_mut(&project.id) {
            Some(row) => {
                *row = project.clone();
                Ok(RowOutcome::Applied)
            }
            None => Ok(RowOutcome::Missing),
        }
    }

    async fn delete(&self, id: i32) -> Result<RowOutcome, AppError> {
        match self.table().rows.remove(&id) {
            Some(_) => Ok(RowOutcome::Applied),
            None => Ok(RowOutcome::Missing),
        }
    }
}
