use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectService<R>
where
    R: ProjectRepository,
{
    repo: R,
}

impl<R> DeleteProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteProjectUseCase for DeleteProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repo.delete(id).await.map_err(|e| match e {
            ProjectRepositoryError::NotFound => DeleteProjectError::NotFound,
            ProjectRepositoryError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
        })
    }
}
