use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_repository::{
    CreatePortfolioUserData, PortfolioUserRecord, PortfolioUserRepository,
    PortfolioUserRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePortfolioUserError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePortfolioUserUseCase: Send + Sync {
    async fn execute(
        &self,
        data: CreatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, CreatePortfolioUserError>;
}

pub struct CreatePortfolioUserService<R>
where
    R: PortfolioUserRepository,
{
    repo: R,
}

impl<R> CreatePortfolioUserService<R>
where
    R: PortfolioUserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> CreatePortfolioUserUseCase for CreatePortfolioUserService<R>
where
    R: PortfolioUserRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, CreatePortfolioUserError> {
        if data.name.trim().is_empty() {
            return Err(CreatePortfolioUserError::EmptyName);
        }

        self.repo.create(data).await.map_err(|e| match e {
            // Creation has no missing-row case; everything else is a repo fault
            PortfolioUserRepositoryError::NotFound
            | PortfolioUserRepositoryError::DatabaseError(_) => {
                CreatePortfolioUserError::RepositoryError(e.to_string())
            }
        })
    }
}
