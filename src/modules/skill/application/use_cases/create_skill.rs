use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::skill::application::cache_keys::SKILLS_CACHE_KEY;
use crate::modules::skill::application::ports::outgoing::{
    CreateSkillData, SkillRecord, SkillRepository, SkillRepositoryError, ValueCache,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateSkillError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateSkillUseCase: Send + Sync {
    async fn execute(&self, data: CreateSkillData) -> Result<SkillRecord, CreateSkillError>;
}

pub struct CreateSkillService<R>
where
    R: SkillRepository,
{
    repo: R,
    cache: Arc<dyn ValueCache + Send + Sync>,
}

impl<R> CreateSkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R, cache: Arc<dyn ValueCache + Send + Sync>) -> Self {
        Self { repo, cache }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
        if data.name.trim().is_empty() {
            return Err(CreateSkillError::EmptyName);
        }

        let record = self.repo.create(data).await.map_err(|e| match e {
            SkillRepositoryError::NotFound
            | SkillRepositoryError::ConcurrencyConflict
            | SkillRepositoryError::DatabaseError(_) => {
                CreateSkillError::RepositoryError(e.to_string())
            }
        })?;

        if let Err(e) = self.cache.remove(SKILLS_CACHE_KEY).await {
            warn!("Failed to invalidate skill list cache: {}", e);
        }
        info!(skill_id = %record.id, "Skill created, list cache invalidated");

        Ok(record)
    }
}
