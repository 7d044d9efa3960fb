use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Skill not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// Serialize + Deserialize: this view round-trips through the cache.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SkillView {
    pub id: Uuid,
    pub name: String,
    pub level: String,
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<SkillView, SkillQueryError>;

    async fn list(&self) -> Result<Vec<SkillView>, SkillQueryError>;
}
