use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::skill::application::cache_keys::{CACHE_TTL_SECONDS, SKILLS_CACHE_KEY};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillQueryError, SkillView, ValueCache,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillView>, GetSkillsError>;
}

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
    cache: Arc<dyn ValueCache + Send + Sync>,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q, cache: Arc<dyn ValueCache + Send + Sync>) -> Self {
        Self { query, cache }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillView>, GetSkillsError> {
        // Cache trouble is never fatal on the read path; it degrades to a miss.
        if let Ok(Some(cached)) = self.cache.get(SKILLS_CACHE_KEY).await {
            match serde_json::from_str::<Vec<SkillView>>(&cached) {
                Ok(views) => {
                    debug!("Skill list served from cache");
                    return Ok(views);
                }
                Err(e) => warn!("Discarding unparseable cached skill list: {}", e),
            }
        }

        let views = self.query.list().await.map_err(|e| match e {
            SkillQueryError::NotFound | SkillQueryError::DatabaseError(_) => {
                GetSkillsError::RepositoryError(e.to_string())
            }
        })?;

        if let Ok(encoded) = serde_json::to_string(&views) {
            if let Err(e) = self
                .cache
                .set(SKILLS_CACHE_KEY, encoded, CACHE_TTL_SECONDS)
                .await
            {
                warn!("Failed to cache skill list: {}", e);
            }
        }

        Ok(views)
    }
}
