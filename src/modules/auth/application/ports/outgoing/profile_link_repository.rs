use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileLinkRepositoryError {
    /// The portfolio user row vanished between check and write.
    #[error("Portfolio user not found")]
    ProfileNotFound,

    /// The unique index on account_id rejected the write (lost race).
    #[error("Account already holds a profile link")]
    AccountAlreadyLinked,

    /// The guarded update found the profile claimed by another account.
    #[error("Portfolio user already claimed by another account")]
    ProfileAlreadyClaimed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Link state of one portfolio user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileLinkState {
    Unlinked,
    LinkedTo(Uuid),
}

//
// ──────────────────────────────────────────────────────────
// Port (profile <-> account association)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileLinkRepository: Send + Sync {
    /// `None` when the portfolio user does not exist.
    async fn profile_link_state(
        &self,
        portfolio_user_id: Uuid,
    ) -> Result<Option<ProfileLinkState>, ProfileLinkRepositoryError>;

    /// The profile this account currently owns, if any.
    async fn linked_profile_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<Uuid>, ProfileLinkRepositoryError>;

    /// Set `portfolio_users.account_id`. The partial unique index on that
    /// column is the final arbiter against concurrent claims.
    async fn link_account(
        &self,
        portfolio_user_id: Uuid,
        account_id: Uuid,
    ) -> Result<(), ProfileLinkRepositoryError>;
}
