use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::skill::application::cache_keys::{skill_key, SKILLS_CACHE_KEY};
use crate::modules::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError, ValueCache,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError>;
}

pub struct DeleteSkillService<R>
where
    R: SkillRepository,
{
    repo: R,
    cache: Arc<dyn ValueCache + Send + Sync>,
}

impl<R> DeleteSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R, cache: Arc<dyn ValueCache + Send + Sync>) -> Self {
        Self { repo, cache }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), DeleteSkillError> {
        self.repo.delete(id).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
            SkillRepositoryError::ConcurrencyConflict
            | SkillRepositoryError::DatabaseError(_) => {
                DeleteSkillError::RepositoryError(e.to_string())
            }
        })?;

        for key in [SKILLS_CACHE_KEY.to_string(), skill_key(id)] {
            if let Err(e) = self.cache.remove(&key).await {
                warn!("Failed to invalidate cache key {}: {}", key, e);
            }
        }
        info!(skill_id = %id, "Skill deleted, caches invalidated");

        Ok(())
    }
}
