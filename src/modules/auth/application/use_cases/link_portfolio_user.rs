use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, ProfileLinkRepository, ProfileLinkRepositoryError, ProfileLinkState,
    TokenProvider, TokenSubject,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkPortfolioUserError {
    #[error("Portfolio user not found")]
    ProfileNotFound,

    #[error("Account could not be resolved")]
    AccountNotResolved,

    #[error("Account is already linked to a different portfolio user")]
    AccountAlreadyLinked,

    #[error("Portfolio user is already claimed by another account")]
    ProfileAlreadyClaimed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// The refreshed credential and the profile it now names.
///
/// `token` is empty when re-issuing the credential failed: the link itself
/// is the durable side effect and stays committed either way.
#[derive(Debug, Clone, Serialize)]
pub struct LinkPortfolioUserOutput {
    pub token: String,
    pub portfolio_user_id: Uuid,
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LinkPortfolioUserUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        portfolio_user_id: Uuid,
    ) -> Result<LinkPortfolioUserOutput, LinkPortfolioUserError>;
}

pub struct LinkPortfolioUserService<L, Q>
where
    L: ProfileLinkRepository,
    Q: AccountQuery,
{
    links: L,
    accounts: Q,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<L, Q> LinkPortfolioUserService<L, Q>
where
    L: ProfileLinkRepository,
    Q: AccountQuery,
{
    pub fn new(links: L, accounts: Q, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            links,
            accounts,
            token_provider,
        }
    }
}

#[async_trait]
impl<L, Q> LinkPortfolioUserUseCase for LinkPortfolioUserService<L, Q>
where
    L: ProfileLinkRepository + Send + Sync,
    Q: AccountQuery + Send + Sync,
{
    /// Per-account state machine:
    /// - Unlinked        -> Linked(P): allowed
    /// - Linked(P)       -> Linked(P): idempotent success, nothing persisted
    /// - Linked(P)       -> Linked(Q): rejected, original link intact
    async fn execute(
        &self,
        account_id: Uuid,
        portfolio_user_id: Uuid,
    ) -> Result<LinkPortfolioUserOutput, LinkPortfolioUserError> {
        let profile_state = self
            .links
            .profile_link_state(portfolio_user_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(LinkPortfolioUserError::ProfileNotFound)?;

        let account = self
            .accounts
            .find_by_id(account_id)
            .await
            .map_err(|e| LinkPortfolioUserError::RepositoryError(e.to_string()))?
            .ok_or(LinkPortfolioUserError::AccountNotResolved)?;

        match self
            .links
            .linked_profile_for_account(account_id)
            .await
            .map_err(map_repo_err)?
        {
            Some(existing) if existing != portfolio_user_id => {
                return Err(LinkPortfolioUserError::AccountAlreadyLinked);
            }
            Some(_) => {
                // Re-link to the same profile: nothing to persist.
            }
            None => {
                if matches!(profile_state, ProfileLinkState::LinkedTo(_)) {
                    return Err(LinkPortfolioUserError::ProfileAlreadyClaimed);
                }

                self.links
                    .link_account(portfolio_user_id, account_id)
                    .await
                    .map_err(map_repo_err)?;
            }
        }

        // The link is committed; a failed token refresh must not undo it.
        let token = match self.token_provider.generate_access_token(TokenSubject {
            account_id: account.id,
            email: account.email,
            role: account.role,
            portfolio_user_id: Some(portfolio_user_id),
        }) {
            Ok(token) => token,
            Err(e) => {
                warn!(
                    account_id = %account_id,
                    portfolio_user_id = %portfolio_user_id,
                    "Profile linked but credential refresh failed: {}",
                    e
                );
                String::new()
            }
        };

        Ok(LinkPortfolioUserOutput {
            token,
            portfolio_user_id,
        })
    }
}

fn map_repo_err(err: ProfileLinkRepositoryError) -> LinkPortfolioUserError {
    match err {
        ProfileLinkRepositoryError::ProfileNotFound => LinkPortfolioUserError::ProfileNotFound,
        ProfileLinkRepositoryError::AccountAlreadyLinked => {
            LinkPortfolioUserError::AccountAlreadyLinked
        }
        ProfileLinkRepositoryError::ProfileAlreadyClaimed => {
            LinkPortfolioUserError::ProfileAlreadyClaimed
        }
        ProfileLinkRepositoryError::DatabaseError(msg) => {
            LinkPortfolioUserError::RepositoryError(msg)
        }
    }
}
