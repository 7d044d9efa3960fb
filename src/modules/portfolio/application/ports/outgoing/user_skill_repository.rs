use async_trait::async_trait;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserSkillRepositoryError {
    #[error("Portfolio user not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (portfolio_user_skills command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserSkillRepository: Send + Sync {
    /// Reconcile the user's skill links against a normalized name set,
    /// inside one unit of work:
    /// - names are matched against the whole skills table by lower(name)
    /// - missing skills are created with the default level
    /// - stale links are removed, missing links inserted
    /// - already-correct links are left untouched (idempotent)
    ///
    /// Skills themselves are never deleted here.
    async fn set_user_skills(
        &self,
        portfolio_user_id: Uuid,
        names: Vec<String>,
    ) -> Result<(), UserSkillRepositoryError>;
}
