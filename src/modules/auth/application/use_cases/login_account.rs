use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, PasswordHasher, TokenProvider, TokenSubject,
};
use email_address::EmailAddress;

// ========================= Login Request =========================

/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            LoginRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
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

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, LoginRequestError> {
        let password = password.trim();

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(password.to_string())
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Errors / Response ========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountInfo {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub portfolio_user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountInfo,
}

// ====================== Use Case ================================

#[async_trait]
pub trait LoginUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

pub struct LoginService<Q>
where
    Q: AccountQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginService<Q>
where
    Q: AccountQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUseCase for LoginService<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let account = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify_password(request.password(), &account.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !password_matches {
            return Err(LoginError::InvalidCredentials);
        }

        // The issued token carries the linked profile id (when present) so
        // later requests resolve it without a storage round trip.
        let token = self
            .token_provider
            .generate_access_token(TokenSubject {
                account_id: account.id,
                email: account.email.clone(),
                role: account.role.clone(),
                portfolio_user_id: account.portfolio_user_id,
            })
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            token,
            account: AccountInfo {
                id: account.id,
                email: account.email,
                role: account.role,
                portfolio_user_id: account.portfolio_user_id,
            },
        })
    }
}
