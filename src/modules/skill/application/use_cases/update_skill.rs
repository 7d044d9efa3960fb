use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::skill::application::cache_keys::{skill_key, SKILLS_CACHE_KEY};
use crate::modules::skill::application::ports::outgoing::{
    SkillRecord, SkillRepository, SkillRepositoryError, UpdateSkillData, ValueCache,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateSkillError {
    #[error("Skill not found")]
    NotFound,

    /// The row changed underneath this update; the caller should re-fetch
    /// and retry with fresh data.
    #[error("Skill was modified concurrently")]
    ConcurrencyConflict,

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: UpdateSkillData)
        -> Result<SkillRecord, UpdateSkillError>;
}

pub struct UpdateSkillService<R>
where
    R: SkillRepository,
{
    repo: R,
    cache: Arc<dyn ValueCache + Send + Sync>,
}

impl<R> UpdateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R, cache: Arc<dyn ValueCache + Send + Sync>) -> Self {
        Self { repo, cache }
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for UpdateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, UpdateSkillError> {
        if data.name.trim().is_empty() {
            return Err(UpdateSkillError::EmptyName);
        }

        let record = self.repo.update(id, data).await.map_err(|e| match e {
            SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
            SkillRepositoryError::ConcurrencyConflict => UpdateSkillError::ConcurrencyConflict,
            SkillRepositoryError::DatabaseError(msg) => UpdateSkillError::RepositoryError(msg),
        })?;

        for key in [SKILLS_CACHE_KEY.to_string(), skill_key(id)] {
            if let Err(e) = self.cache.remove(&key).await {
                warn!("Failed to invalidate cache key {}: {}", key, e);
            }
        }
        info!(skill_id = %id, "Skill updated, caches invalidated");

        Ok(record)
    }
}
