mod memory;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;
use crate::models::{NewProject, Project};

pub use memory::MemoryStore;

/// Result of a statement that targets a single row by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    Applied,
    Missing,
}

impl RowOutcome {
    fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            RowOutcome::Missing
        } else {
            RowOutcome::Applied
        }
    }
}

/// Persistence for project rows.
///
/// Every method is a single statement against a single row, except
/// `fetch_all`. Missing rows are reported as values, not errors.
#[allow(async_fn_in_trait)]
pub trait ProjectStore {
    async fn insert(&self, project: &NewProject) -> Result<Project, AppError>;
    async fn fetch_all(&self) -> Result<Vec<Project>, AppError>;
    async fn fetch_by_id(&self, id: i32) -> Result<Option<Project>, AppError>;
    async fn update(&self, project: &Project) -> Result<RowOutcome, AppError>;
    async fn delete(&self, id: i32) -> Result<RowOutcome, AppError>;
}

const SELECT_PROJECT: &str = r#"
    SELECT
        project_id AS id,
        project_name AS name,
        estimated_hours,
        actual_hours,
        difficulty,
        notes
    FROM project
"#;

/// PostgreSQL-backed store
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new Database instance with a connection pool
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(config.database_url()?)
            .await?;

        Ok(Self { pool })
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

impl ProjectStore for Database {
    async fn insert(&self, project: &NewProject) -> Result<Project, AppError> {
        debug!(name = %project.name, "inserting project");
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING project_id
            "#,
        )
        .bind(&project.name)
        .bind(&project.estimated_hours)
        .bind(&project.actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(self.get_pool())
        .await?;

        Ok(project.clone().with_id(id))
    }

    async fn fetch_all(&self) -> Result<Vec<Project>, AppError> {
        debug!("fetching all projects");
        let projects = sqlx::query_as::<_, Project>(&format!("{SELECT_PROJECT} ORDER BY project_id ASC"))
            .fetch_all(self.get_pool())
            .await?;

        Ok(projects)
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Project>, AppError> {
        debug!(id, "fetching project");
        let project = sqlx::query_as::<_, Project>(&format!("{SELECT_PROJECT} WHERE project_id = $1"))
            .bind(id)
            .fetch_optional(self.get_pool())
            .await?;

        Ok(project)
    }

    async fn update(&self, project: &Project) -> Result<RowOutcome, AppError> {
        debug!(id = project.id, "updating project");
        let result = sqlx::query(
            r#"
            UPDATE project
            SET project_name = $1, estimated_hours = $2, actual_hours = $3,
                difficulty = $4, notes = $5
            WHERE project_id = $6
            "#,
        )
        .bind(&project.name)
        .bind(&project.estimated_hours)
        .bind(&project.actual_hours)
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.id)
        .execute(self.get_pool())
        .await?;

        Ok(RowOutcome::from_rows_affected(result.rows_affected()))
    }

    async fn delete(&self, id: i32) -> Result<RowOutcome, AppError> {
        debug!(id, "deleting project");
        let result = sqlx::query("DELETE FROM project WHERE project_id = $1")
            .bind(id)
            .execute(self.get_pool())
            .await?;

        Ok(RowOutcome::from_rows_affected(result.rows_affected()))
    }
}

/// Initialize the database connection pool
pub async fn init(config: &Config) -> Result<Database, AppError> {
    let db = Database::new(config).await?;

    // The project table is provisioned outside this tool.
    // sqlx::migrate!().run(db.get_pool()).await?;

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rows_affected_means_missing() {
        assert_eq!(RowOutcome::from_rows_affected(0), RowOutcome::Missing);
        assert_eq!(RowOutcome::from_rows_affected(1), RowOutcome::Applied);
    }
}
