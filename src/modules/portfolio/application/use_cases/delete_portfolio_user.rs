use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_repository::{
    PortfolioUserRepository, PortfolioUserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeletePortfolioUserError {
    #[error("Portfolio user not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeletePortfolioUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeletePortfolioUserError>;
}

pub struct DeletePortfolioUserService<R>
where
    R: PortfolioUserRepository,
{
    repo: R,
}

impl<R> DeletePortfolioUserService<R>
where
    R: PortfolioUserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeletePortfolioUserUseCase for DeletePortfolioUserService<R>
where
    R: PortfolioUserRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeletePortfolioUserError> {
        self.repo.delete(id).await.map_err(|e| match e {
            PortfolioUserRepositoryError::NotFound => DeletePortfolioUserError::NotFound,
            PortfolioUserRepositoryError::DatabaseError(msg) => {
                DeletePortfolioUserError::RepositoryError(msg)
            }
        })
    }
}
