use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::user_skill_repository::{
    UserSkillRepository, UserSkillRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetUserSkillsError {
    #[error("Portfolio user not found")]
    UserNotFound,

    #[error("Skill list cannot be empty")]
    EmptySkillSet,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserSkillRepositoryError> for SetUserSkillsError {
    fn from(err: UserSkillRepositoryError) -> Self {
        match err {
            UserSkillRepositoryError::UserNotFound => SetUserSkillsError::UserNotFound,
            UserSkillRepositoryError::DatabaseError(msg) => {
                SetUserSkillsError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SetUserSkillsUseCase: Send + Sync {
    async fn execute(
        &self,
        portfolio_user_id: Uuid,
        names: Vec<String>,
    ) -> Result<(), SetUserSkillsError>;
}

pub struct SetUserSkillsService<R>
where
    R: UserSkillRepository,
{
    repo: R,
}

impl<R> SetUserSkillsService<R>
where
    R: UserSkillRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

/// Trim, drop blanks, de-duplicate ignoring case. The first spelling of a
/// name wins; later case-variants are folded into it.
fn normalize_names(names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut normalized = Vec::new();

    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            normalized.push(trimmed.to_string());
        }
    }

    normalized
}

#[async_trait]
impl<R> SetUserSkillsUseCase for SetUserSkillsService<R>
where
    R: UserSkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        portfolio_user_id: Uuid,
        names: Vec<String>,
    ) -> Result<(), SetUserSkillsError> {
        let normalized = normalize_names(names);

        if normalized.is_empty() {
            return Err(SetUserSkillsError::EmptySkillSet);
        }

        self.repo
            .set_user_skills(portfolio_user_id, normalized)
            .await
            .map_err(SetUserSkillsError::from)
    }
}
