use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read model for an account, including the profile link when one exists.
#[derive(Clone, Debug)]
pub struct AccountRecord {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub portfolio_user_id: Option<Uuid>,
}

#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Case-insensitive email lookup.
    async fn find_by_email(&self, email: &str)
        -> Result<Option<AccountRecord>, AccountQueryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccountRecord>, AccountQueryError>;
}
