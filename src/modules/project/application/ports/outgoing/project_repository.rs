use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Clone, Debug)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Clone, Debug)]
pub struct UpdateProjectData {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Clone, Debug)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, data: CreateProjectData)
        -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Join rows referencing the project cascade away with it.
    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
