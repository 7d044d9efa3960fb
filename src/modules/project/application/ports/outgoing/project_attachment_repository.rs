use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectAttachmentRepositoryError {
    #[error("Portfolio user not found")]
    PortfolioUserNotFound,

    #[error("Project not found")]
    ProjectNotFound,

    /// The (user, project) pair is already linked. A distinct outcome from
    /// both success and not-found.
    #[error("Project already attached to this portfolio user")]
    AlreadyAttached,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (portfolio_user_projects command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectAttachmentRepository: Send + Sync {
    /// Insert one (user, project) join row. The composite primary key is
    /// the final arbiter under concurrency; the pre-checks only exist to
    /// produce friendlier errors.
    async fn attach(
        &self,
        portfolio_user_id: Uuid,
        project_id: Uuid,
    ) -> Result<(), ProjectAttachmentRepositoryError>;
}
