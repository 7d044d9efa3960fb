use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, PasswordHasher,
};
use email_address::EmailAddress;

// ========================= Register Request =========================

/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterAccountRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    PasswordTooShort,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::PasswordTooShort => {
                write!(f, "Password must be at least 8 characters")
            }
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterAccountRequest {
    pub fn new(email: String, password: String) -> Result<Self, RegisterRequestError> {
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, RegisterRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, RegisterRequestError> {
        if password.trim().len() < 8 {
            return Err(RegisterRequestError::PasswordTooShort);
        }

        Ok(password)
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterAccountRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            email: String,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterAccountRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Errors / Response ========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterAccountError {
    #[error("Email is already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<AccountRepositoryError> for RegisterAccountError {
    fn from(err: AccountRepositoryError) -> Self {
        match err {
            AccountRepositoryError::EmailAlreadyRegistered => {
                RegisterAccountError::EmailAlreadyRegistered
            }
            AccountRepositoryError::DatabaseError(msg) => {
                RegisterAccountError::RepositoryError(msg)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredAccount {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

// ====================== Use Case ================================

#[async_trait]
pub trait RegisterAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RegisterAccountRequest,
    ) -> Result<RegisteredAccount, RegisterAccountError>;
}

pub struct RegisterAccountService<R>
where
    R: AccountRepository,
{
    repo: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<R> RegisterAccountService<R>
where
    R: AccountRepository,
{
    pub fn new(repo: R, password_hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            repo,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> RegisterAccountUseCase for RegisterAccountService<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: RegisterAccountRequest,
    ) -> Result<RegisteredAccount, RegisterAccountError> {
        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterAccountError::HashingFailed(e.to_string()))?;

        let created = self
            .repo
            .create_account(
                crate::modules::auth::application::ports::outgoing::account_repository::CreateAccountData {
                    email: request.email().to_string(),
                    password_hash,
                },
            )
            .await?;

        Ok(RegisteredAccount {
            id: created.id,
            email: created.email,
            role: created.role,
        })
    }
}
