//! Project repository for database operations
//!
//! Owns all SQL issued against the project tables. Reads that hydrate child
//! collections hold a single pooled connection for the whole operation so the
//! children reflect a stable project set; update and delete run inside a
//! transaction scoped to their one statement.

use super::entity::{Category, Material, Project, Step};
use super::row::{CategoryRow, MaterialRow, ProjectRow, StepRow, classify_fetch_error};
use crate::error::{Error, Result};
use sqlx::{SqliteConnection, SqlitePool};

/// Repository for project database operations
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Persist a transient project and return it with its assigned id
    pub async fn insert(&self, mut project: Project) -> Result<Project> {
        let result = sqlx::query(
            r#"
            INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.project_name)
        .bind(project.estimated_hours.to_string())
        .bind(project.actual_hours.to_string())
        .bind(project.difficulty)
        .bind(&project.notes)
        .execute(&self.pool)
        .await?;

        project.project_id = result.last_insert_rowid();
        tracing::debug!(project_id = project.project_id, "project inserted");

        Ok(project)
    }

    /// Fetch all projects ordered by name, each fully hydrated with its
    /// materials, steps, and categories.
    ///
    /// Issues three secondary queries per project on the same connection as
    /// the primary query.
    pub async fn fetch_all(&self) -> Result<Vec<Project>> {
        let mut conn = self.pool.acquire().await?;

        let rows: Vec<ProjectRow> = sqlx::query_as("SELECT * FROM project ORDER BY project_name")
            .fetch_all(&mut *conn)
            .await
            .map_err(classify_fetch_error)?;

        let mut projects = Vec::with_capacity(rows.len());

        for row in rows {
            let mut project = row.into_project()?;
            let project_id = project.project_id;

            project.materials = Self::fetch_materials(&mut conn, project_id).await?;
            project.steps = Self::fetch_steps(&mut conn, project_id).await?;
            project.categories = Self::fetch_categories(&mut conn, project_id).await?;

            projects.push(project);
        }

        Ok(projects)
    }

    /// Fetch a single project by id, WITHOUT hydrating child collections.
    ///
    /// An absent row is a normal outcome, not an error.
    pub async fn fetch_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        let row: Option<ProjectRow> = sqlx::query_as("SELECT * FROM project WHERE project_id = ?")
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(classify_fetch_error)?;

        match row {
            Some(row) => Ok(Some(row.into_project()?)),
            None => Ok(None),
        }
    }

    /// Replace all mutable fields of the row matching the project's id.
    ///
    /// Returns true iff exactly one row was affected; false when the id
    /// matched nothing. More than one affected row means the primary key is
    /// no longer unique and is surfaced as an integrity error.
    pub async fn update(&self, project: &Project) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE project
            SET project_name = ?, estimated_hours = ?, actual_hours = ?, difficulty = ?, notes = ?
            WHERE project_id = ?
            "#,
        )
        .bind(&project.project_name)
        .bind(project.estimated_hours.to_string())
        .bind(project.actual_hours.to_string())
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.project_id)
        .execute(&mut *tx)
        .await?;

        match result.rows_affected() {
            0 => {
                tx.rollback().await?;
                Ok(false)
            }
            1 => {
                tx.commit().await?;
                Ok(true)
            }
            n => {
                tx.rollback().await?;
                Err(Error::Integrity(format!(
                    "update affected {} rows for project_id={}",
                    n, project.project_id
                )))
            }
        }
    }

    /// Delete the project row matching the id.
    ///
    /// Same true/false contract as `update`.
    pub async fn delete(&self, project_id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM project WHERE project_id = ?")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        match result.rows_affected() {
            0 => {
                tx.rollback().await?;
                Ok(false)
            }
            1 => {
                tx.commit().await?;
                tracing::debug!(project_id, "project deleted");
                Ok(true)
            }
            n => {
                tx.rollback().await?;
                Err(Error::Integrity(format!(
                    "delete affected {} rows for project_id={}",
                    n, project_id
                )))
            }
        }
    }

    async fn fetch_materials(conn: &mut SqliteConnection, project_id: i64) -> Result<Vec<Material>> {
        let rows: Vec<MaterialRow> = sqlx::query_as("SELECT * FROM material WHERE project_id = ?")
            .bind(project_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(classify_fetch_error)?;

        rows.into_iter().map(MaterialRow::into_material).collect()
    }

    async fn fetch_steps(conn: &mut SqliteConnection, project_id: i64) -> Result<Vec<Step>> {
        let rows: Vec<StepRow> =
            sqlx::query_as("SELECT * FROM step WHERE project_id = ? ORDER BY step_order")
                .bind(project_id)
                .fetch_all(&mut *conn)
                .await
                .map_err(classify_fetch_error)?;

        rows.into_iter().map(StepRow::into_step).collect()
    }

    async fn fetch_categories(
        conn: &mut SqliteConnection,
        project_id: i64,
    ) -> Result<Vec<Category>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT c.category_id, c.category_name
            FROM category c
            JOIN project_category pc USING (category_id)
            WHERE pc.project_id = ?
            "#,
        )
        .bind(project_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(classify_fetch_error)?;

        rows.into_iter().map(CategoryRow::into_category).collect()
    }
}
