use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::modules::skill::application::cache_keys::{skill_key, CACHE_TTL_SECONDS};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillQueryError, SkillView, ValueCache,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SkillView, GetSingleSkillError>;
}

pub struct GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    query: Q,
    cache: Arc<dyn ValueCache + Send + Sync>,
}

impl<Q> GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q, cache: Arc<dyn ValueCache + Send + Sync>) -> Self {
        Self { query, cache }
    }
}

#[async_trait]
impl<Q> GetSingleSkillUseCase for GetSingleSkillService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<SkillView, GetSingleSkillError> {
        let key = skill_key(id);

        if let Ok(Some(cached)) = self.cache.get(&key).await {
            match serde_json::from_str::<SkillView>(&cached) {
                Ok(view) => {
                    debug!(skill_id = %id, "Skill served from cache");
                    return Ok(view);
                }
                Err(e) => warn!("Discarding unparseable cached skill: {}", e),
            }
        }

        let view = self.query.get_by_id(id).await.map_err(|e| match e {
            SkillQueryError::NotFound => GetSingleSkillError::NotFound,
            SkillQueryError::DatabaseError(msg) => GetSingleSkillError::RepositoryError(msg),
        })?;

        if let Ok(encoded) = serde_json::to_string(&view) {
            if let Err(e) = self.cache.set(&key, encoded, CACHE_TTL_SECONDS).await {
                warn!("Failed to cache skill {}: {}", id, e);
            }
        }

        Ok(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::cache_stub::InMemoryValueCache;

    struct FixedSkillQuery {
        result: Result<SkillView, SkillQueryError>,
    }

    #[async_trait]
    impl SkillQuery for FixedSkillQuery {
        async fn get_by_id(&self, _id: Uuid) -> Result<SkillView, SkillQueryError> {
            self.result.clone()
        }

        async fn list(&self) -> Result<Vec<SkillView>, SkillQueryError> {
            unimplemented!("not used in single tests")
        }
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let service = GetSingleSkillService::new(
            FixedSkillQuery {
                result: Err(SkillQueryError::NotFound),
            },
            Arc::new(InMemoryValueCache::default()),
        );

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetSingleSkillError::NotFound)));
    }

    #[tokio::test]
    async fn execute_populates_the_per_skill_key() {
        let view = SkillView {
            id: Uuid::new_v4(),
            name: "Go".to_string(),
            level: "Beginner".to_string(),
        };
        let cache = Arc::new(InMemoryValueCache::default());
        let service = GetSingleSkillService::new(
            FixedSkillQuery {
                result: Ok(view.clone()),
            },
            cache.clone(),
        );

        service.execute(view.id).await.unwrap();

        let cached = cache.get(&skill_key(view.id)).await.unwrap();
        assert!(cached.is_some());
    }
}
