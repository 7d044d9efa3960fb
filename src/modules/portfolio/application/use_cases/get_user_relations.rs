use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_query::{
    AttachedProjectView, AttachedSkillView, PortfolioUserQuery, PortfolioUserQueryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserRelationsError {
    #[error("Portfolio user not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioUserQueryError> for GetUserRelationsError {
    fn from(err: PortfolioUserQueryError) -> Self {
        match err {
            PortfolioUserQueryError::NotFound => GetUserRelationsError::UserNotFound,
            PortfolioUserQueryError::DatabaseError(msg) => {
                GetUserRelationsError::RepositoryError(msg)
            }
        }
    }
}

/// Narrowed read: just the projects attached to one user.
#[async_trait]
pub trait GetUserProjectsUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Vec<AttachedProjectView>, GetUserRelationsError>;
}

/// Narrowed read: just the skills attached to one user.
#[async_trait]
pub trait GetUserSkillsUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Vec<AttachedSkillView>, GetUserRelationsError>;
}

pub struct GetUserRelationsService<Q>
where
    Q: PortfolioUserQuery,
{
    query: Q,
}

impl<Q> GetUserRelationsService<Q>
where
    Q: PortfolioUserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserProjectsUseCase for GetUserRelationsService<Q>
where
    Q: PortfolioUserQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Vec<AttachedProjectView>, GetUserRelationsError> {
        self.query
            .get_user_projects(id)
            .await
            .map_err(GetUserRelationsError::from)
    }
}

#[async_trait]
impl<Q> GetUserSkillsUseCase for GetUserRelationsService<Q>
where
    Q: PortfolioUserQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Vec<AttachedSkillView>, GetUserRelationsError> {
        self.query
            .get_user_skills(id)
            .await
            .map_err(GetUserRelationsError::from)
    }
}
