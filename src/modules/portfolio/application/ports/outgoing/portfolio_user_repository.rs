use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioUserRepositoryError {
    #[error("Portfolio user not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Clone, Debug)]
pub struct CreatePortfolioUserData {
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
}

#[derive(Clone, Debug)]
pub struct UpdatePortfolioUserData {
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
}

#[derive(Clone, Debug)]
pub struct PortfolioUserRecord {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
    pub account_id: Option<Uuid>,
}

#[async_trait]
pub trait PortfolioUserRepository: Send + Sync {
    async fn create(
        &self,
        data: CreatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, PortfolioUserRepositoryError>;

    /// Updates identity fields only; relationship links have their own paths.
    async fn update(
        &self,
        id: Uuid,
        data: UpdatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, PortfolioUserRepositoryError>;

    /// Join rows cascade; a linked account is left untouched.
    async fn delete(&self, id: Uuid) -> Result<(), PortfolioUserRepositoryError>;
}
