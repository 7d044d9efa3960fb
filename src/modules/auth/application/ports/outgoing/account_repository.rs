use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Clone, Debug)]
pub struct CreateAccountData {
    pub email: String,
    pub password_hash: String,
}

#[derive(Clone, Debug)]
pub struct AccountResult {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(
        &self,
        account: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError>;
}
