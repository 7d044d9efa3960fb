use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_attachment_repository::{
    ProjectAttachmentRepository, ProjectAttachmentRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachProjectError {
    #[error("Portfolio user not found")]
    PortfolioUserNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Project already attached to this portfolio user")]
    AlreadyAttached,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectAttachmentRepositoryError> for AttachProjectError {
    fn from(err: ProjectAttachmentRepositoryError) -> Self {
        match err {
            ProjectAttachmentRepositoryError::PortfolioUserNotFound => {
                AttachProjectError::PortfolioUserNotFound
            }
            ProjectAttachmentRepositoryError::ProjectNotFound => AttachProjectError::ProjectNotFound,
            ProjectAttachmentRepositoryError::AlreadyAttached => AttachProjectError::AlreadyAttached,
            ProjectAttachmentRepositoryError::DatabaseError(msg) => {
                AttachProjectError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait AttachProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        portfolio_user_id: Uuid,
        project_id: Uuid,
    ) -> Result<(), AttachProjectError>;
}

pub struct AttachProjectService<R>
where
    R: ProjectAttachmentRepository,
{
    repo: R,
}

impl<R> AttachProjectService<R>
where
    R: ProjectAttachmentRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> AttachProjectUseCase for AttachProjectService<R>
where
    R: ProjectAttachmentRepository + Send + Sync,
{
    async fn execute(
        &self,
        portfolio_user_id: Uuid,
        project_id: Uuid,
    ) -> Result<(), AttachProjectError> {
        self.repo
            .attach(portfolio_user_id, project_id)
            .await
            .map_err(AttachProjectError::from)
    }
}
