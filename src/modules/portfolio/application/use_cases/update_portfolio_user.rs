use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_repository::{
    PortfolioUserRecord, PortfolioUserRepository, PortfolioUserRepositoryError,
    UpdatePortfolioUserData,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePortfolioUserError {
    #[error("Portfolio user not found")]
    NotFound,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioUserRepositoryError> for UpdatePortfolioUserError {
    fn from(err: PortfolioUserRepositoryError) -> Self {
        match err {
            PortfolioUserRepositoryError::NotFound => UpdatePortfolioUserError::NotFound,
            PortfolioUserRepositoryError::DatabaseError(msg) => {
                UpdatePortfolioUserError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait UpdatePortfolioUserUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: UpdatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, UpdatePortfolioUserError>;
}

pub struct UpdatePortfolioUserService<R>
where
    R: PortfolioUserRepository,
{
    repo: R,
}

impl<R> UpdatePortfolioUserService<R>
where
    R: PortfolioUserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdatePortfolioUserUseCase for UpdatePortfolioUserService<R>
where
    R: PortfolioUserRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, UpdatePortfolioUserError> {
        if data.name.trim().is_empty() {
            return Err(UpdatePortfolioUserError::EmptyName);
        }

        self.repo
            .update(id, data)
            .await
            .map_err(UpdatePortfolioUserError::from)
    }
}
