use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Clone, Debug, Serialize)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError>;

    async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError>;
}
