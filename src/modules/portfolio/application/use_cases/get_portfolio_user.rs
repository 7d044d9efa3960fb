use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_query::{
    PortfolioUserQuery, PortfolioUserQueryError, PortfolioUserView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioUserError {
    #[error("Portfolio user not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PortfolioUserQueryError> for GetPortfolioUserError {
    fn from(err: PortfolioUserQueryError) -> Self {
        match err {
            PortfolioUserQueryError::NotFound => GetPortfolioUserError::NotFound,
            PortfolioUserQueryError::DatabaseError(msg) => {
                GetPortfolioUserError::RepositoryError(msg)
            }
        }
    }
}

#[async_trait]
pub trait GetPortfolioUserUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<PortfolioUserView, GetPortfolioUserError>;
}

pub struct GetPortfolioUserService<Q>
where
    Q: PortfolioUserQuery,
{
    query: Q,
}

impl<Q> GetPortfolioUserService<Q>
where
    Q: PortfolioUserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioUserUseCase for GetPortfolioUserService<Q>
where
    Q: PortfolioUserQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<PortfolioUserView, GetPortfolioUserError> {
        self.query
            .get_by_id(id)
            .await
            .map_err(GetPortfolioUserError::from)
    }
}
