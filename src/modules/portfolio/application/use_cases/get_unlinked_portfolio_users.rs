use async_trait::async_trait;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_query::{
    PortfolioUserQuery, PortfolioUserQueryError, PortfolioUserSummary,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUnlinkedPortfolioUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Profiles nobody has claimed yet, offered to freshly registered accounts.
#[async_trait]
pub trait GetUnlinkedPortfolioUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PortfolioUserSummary>, GetUnlinkedPortfolioUsersError>;
}

pub struct GetUnlinkedPortfolioUsersService<Q>
where
    Q: PortfolioUserQuery,
{
    query: Q,
}

impl<Q> GetUnlinkedPortfolioUsersService<Q>
where
    Q: PortfolioUserQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUnlinkedPortfolioUsersUseCase for GetUnlinkedPortfolioUsersService<Q>
where
    Q: PortfolioUserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<PortfolioUserSummary>, GetUnlinkedPortfolioUsersError> {
        self.query.list_unlinked().await.map_err(|e| match e {
            PortfolioUserQueryError::NotFound | PortfolioUserQueryError::DatabaseError(_) => {
                GetUnlinkedPortfolioUsersError::RepositoryError(e.to_string())
            }
        })
    }
}
