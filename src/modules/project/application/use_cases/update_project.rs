use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError>;
}

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, UpdateProjectError> {
        if data.title.trim().is_empty() {
            return Err(UpdateProjectError::EmptyTitle);
        }

        self.repo.update(id, data).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => UpdateProjectError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::ports::outgoing::CreateProjectData;

    struct MockProjectRepository {
        result: Result<ProjectRecord, ProjectRepositoryError>,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepository {
        async fn create(
            &self,
            _data: CreateProjectData,
        ) -> Result<ProjectRecord, ProjectRepositoryError> {
            unimplemented!("not used in update tests")
        }

        async fn update(
            &self,
            _id: Uuid,
            _data: UpdateProjectData,
        ) -> Result<ProjectRecord, ProjectRepositoryError> {
            self.result.clone()
        }

        async fn delete(&self, _id: Uuid) -> Result<(), ProjectRepositoryError> {
            unimplemented!("not used in update tests")
        }
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let service = UpdateProjectService::new(MockProjectRepository {
            result: Err(ProjectRepositoryError::NotFound),
        });

        let result = service
            .execute(
                Uuid::new_v4(),
                UpdateProjectData {
                    title: "New title".to_string(),
                    description: String::new(),
                    image_url: String::new(),
                },
            )
            .await;

        assert!(matches!(result, Err(UpdateProjectError::NotFound)));
    }
}
