//! Project aggregation service
//!
//! Thin façade over the repository, translating the repository's boolean
//! not-found signals into domain errors for the UI layer. All other errors
//! pass through untouched; nothing is retried.

use super::entity::Project;
use super::repository::ProjectRepository;
use crate::error::{Error, Result};
use crate::storage::Database;

/// Service layer the UI talks to
#[derive(Debug, Clone)]
pub struct ProjectService {
    repository: ProjectRepository,
}

impl ProjectService {
    /// Create a service backed by the given database
    pub fn new(db: &Database) -> Self {
        Self {
            repository: ProjectRepository::new(db.pool().clone()),
        }
    }

    /// Persist a new project and return it with its assigned id
    pub async fn add_project(&self, project: Project) -> Result<Project> {
        let created = self.repository.insert(project).await?;
        tracing::info!(project_id = created.project_id, name = %created.project_name, "project created");
        Ok(created)
    }

    /// Fetch all projects, fully hydrated, ordered by name
    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        self.repository.fetch_all().await
    }

    /// Fetch one project by id without its child collections
    pub async fn fetch_project_by_id(&self, project_id: i64) -> Result<Option<Project>> {
        self.repository.fetch_by_id(project_id).await
    }

    /// Replace all mutable fields of an existing project.
    ///
    /// Fails with [`Error::ProjectNotFound`] when the id matches nothing.
    pub async fn update_project_details(&self, project: &Project) -> Result<()> {
        if !self.repository.update(project).await? {
            return Err(Error::ProjectNotFound(project.project_id));
        }
        Ok(())
    }

    /// Remove a project by id.
    ///
    /// Fails with [`Error::ProjectNotFound`] when the id matches nothing.
    pub async fn delete_project(&self, project_id: i64) -> Result<()> {
        if !self.repository.delete(project_id).await? {
            return Err(Error::ProjectNotFound(project_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    async fn create_test_service() -> ProjectService {
        let db = Database::in_memory()
            .await
            .expect("Failed to create test database");
        ProjectService::new(&db)
    }

    #[tokio::test]
    async fn test_update_missing_project_is_not_found() {
        let service = create_test_service().await;

        let mut ghost = Project::new("Ghost", Decimal::ONE, Decimal::ZERO, 1);
        ghost.project_id = 42;

        let err = service.update_project_details(&ghost).await.unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound(42)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_delete_missing_project_is_not_found() {
        let service = create_test_service().await;

        let err = service.delete_project(42).await.unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound(42)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_storage_unchanged() {
        let service = create_test_service().await;
        let created = service
            .add_project(Project::new("Deck build", Decimal::new(405, 1), Decimal::ZERO, 3))
            .await
            .unwrap();

        let mut ghost = created.clone();
        ghost.project_id = 9999;
        ghost.project_name = "Should not land".to_string();
        assert!(service.update_project_details(&ghost).await.is_err());

        let unchanged = service
            .fetch_project_by_id(created.project_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged.project_name, "Deck build");
    }

    #[tokio::test]
    async fn test_full_project_lifecycle() {
        let service = create_test_service().await;

        // Insert
        let project = Project::new(
            "Deck build",
            "40.5".parse::<Decimal>().unwrap(),
            Decimal::ZERO,
            3,
        )
        .with_notes("outdoor");
        let created = service.add_project(project).await.unwrap();
        assert!(created.project_id > 0);

        // Listed
        let all = service.fetch_all_projects().await.unwrap();
        assert!(all.iter().any(|p| p.project_id == created.project_id));

        // Update name and actual hours
        let updated = Project {
            project_name: "Deck build v2".to_string(),
            actual_hours: "38.25".parse::<Decimal>().unwrap(),
            ..created.clone()
        };
        service.update_project_details(&updated).await.unwrap();

        let fetched = service
            .fetch_project_by_id(created.project_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.project_name, "Deck build v2");
        assert_eq!(fetched.actual_hours.to_string(), "38.25");

        // Delete, then the id is gone and a second delete reports not-found
        service.delete_project(created.project_id).await.unwrap();
        assert!(
            service
                .fetch_project_by_id(created.project_id)
                .await
                .unwrap()
                .is_none()
        );

        let err = service.delete_project(created.project_id).await.unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound(_)));
    }
}
