use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioUserQueryError {
    #[error("Portfolio user not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AttachedProjectView {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AttachedSkillView {
    pub id: Uuid,
    pub name: String,
    pub level: String,
}

/// Aggregated profile: identity fields plus both relation lists.
#[derive(Clone, Debug, Serialize)]
pub struct PortfolioUserView {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
    pub projects: Vec<AttachedProjectView>,
    pub skills: Vec<AttachedSkillView>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PortfolioUserSummary {
    pub id: Uuid,
    pub name: String,
    pub bio: String,
    pub profile_image_url: String,
}

#[async_trait]
pub trait PortfolioUserQuery: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<PortfolioUserView, PortfolioUserQueryError>;

    async fn list(&self) -> Result<Vec<PortfolioUserView>, PortfolioUserQueryError>;

    /// Profiles with no linked account.
    async fn list_unlinked(&self) -> Result<Vec<PortfolioUserSummary>, PortfolioUserQueryError>;

    async fn get_user_projects(
        &self,
        id: Uuid,
    ) -> Result<Vec<AttachedProjectView>, PortfolioUserQueryError>;

    async fn get_user_skills(
        &self,
        id: Uuid,
    ) -> Result<Vec<AttachedSkillView>, PortfolioUserQueryError>;
}
