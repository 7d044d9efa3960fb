use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_query::{
    PortfolioUserQuery, PortfolioUserQueryError, PortfolioUserView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetPortfolioUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PortfolioUserView>, GetPortfolioUsersError>;
}

pub struct GetPortfolioUsersService<Q>
where
    Q: PortfolioUserQuery,
{
    query: Q,
}

impl<Q> GetPortfolioUsersService<Q>
where
    Q: PortfolioUserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioUsersUseCase for GetPortfolioUsersService<Q>
where
    Q: PortfolioUserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PortfolioUserView>, GetPortfolioUsersError> {
        self.query.list().await.map_err(|e| match e {
            PortfolioUserQueryError::NotFound | PortfolioUserQueryError::DatabaseError(_) => {
                GetPortfolioUsersError::RepositoryError(e.to_string())
            }
        })
    }
}
