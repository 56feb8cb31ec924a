//! Database schema
//!
//! The five workbench tables, created idempotently on connect. The schema is
//! fixed; there is no versioned migration machinery.

use sqlx::SqlitePool;

/// SQL for creating all workbench tables
pub const SCHEMA: &str = r#"
    -- Projects table. Hours columns are stored as TEXT so decimal values
    -- round-trip exactly.
    CREATE TABLE IF NOT EXISTS project (
        project_id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_name TEXT NOT NULL,
        estimated_hours TEXT,
        actual_hours TEXT,
        difficulty INTEGER,
        notes TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_project_project_name ON project(project_name);

    -- Materials needed for a project
    CREATE TABLE IF NOT EXISTS material (
        material_id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES project(project_id) ON DELETE CASCADE,
        material_name TEXT NOT NULL,
        num_required INTEGER,
        cost TEXT
    );

    CREATE INDEX IF NOT EXISTS idx_material_project_id ON material(project_id);

    -- Ordered steps to complete a project
    CREATE TABLE IF NOT EXISTS step (
        step_id INTEGER PRIMARY KEY AUTOINCREMENT,
        project_id INTEGER NOT NULL REFERENCES project(project_id) ON DELETE CASCADE,
        step_text TEXT NOT NULL,
        step_order INTEGER NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_step_project_id ON step(project_id);

    -- Categories, linked to projects through the association table
    CREATE TABLE IF NOT EXISTS category (
        category_id INTEGER PRIMARY KEY AUTOINCREMENT,
        category_name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS project_category (
        project_id INTEGER NOT NULL REFERENCES project(project_id) ON DELETE CASCADE,
        category_id INTEGER NOT NULL REFERENCES category(category_id) ON DELETE CASCADE,
        PRIMARY KEY (project_id, category_id)
    );
"#;

/// Create all tables if they do not exist
pub async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    tracing::debug!("Ensuring database schema");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test pool")
    }

    #[tokio::test]
    async fn test_tables_created() {
        let pool = create_test_pool().await;
        init_schema(&pool).await.unwrap();

        let tables = vec!["project", "material", "step", "category", "project_category"];

        for table in tables {
            let result: (i32,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(&pool)
                .await
                .unwrap_or_else(|_| panic!("Table {} should exist", table));
            assert_eq!(result.0, 0, "Table {} should be empty", table);
        }
    }

    #[tokio::test]
    async fn test_init_schema_idempotent() {
        let pool = create_test_pool().await;

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let result: (i32,) = sqlx::query_as("SELECT COUNT(*) FROM project")
            .fetch_one(&pool)
            .await
            .expect("project table should exist");
        assert_eq!(result.0, 0);
    }
}
