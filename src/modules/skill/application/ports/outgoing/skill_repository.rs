use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillRepositoryError {
    #[error("Skill not found")]
    NotFound,

    /// Lost an optimistic-concurrency race on an update. The caller should
    /// re-fetch and retry with fresh data.
    #[error("Skill was modified concurrently")]
    ConcurrencyConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Clone, Debug)]
pub struct CreateSkillData {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug)]
pub struct UpdateSkillData {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub level: String,
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create(&self, data: CreateSkillData) -> Result<SkillRecord, SkillRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError>;

    /// Join rows referencing the skill cascade away with it.
    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError>;
}
