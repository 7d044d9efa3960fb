use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectRecord, CreateProjectError>;
}

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, data: CreateProjectData) -> Result<ProjectRecord, CreateProjectError> {
        if data.title.trim().is_empty() {
            return Err(CreateProjectError::EmptyTitle);
        }

        self.repo.create(data).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound | ProjectRepositoryError::DatabaseError(_) => {
                CreateProjectError::RepositoryError(e.to_string())
            }
        })
    }
}
