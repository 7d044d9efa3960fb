use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<ProjectView, GetSingleProjectError>;
}

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<ProjectView, GetSingleProjectError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetSingleProjectError::RepositoryError(msg),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockProjectQuery {
        result: Result<ProjectView, ProjectQueryError>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn get_by_id(&self, _id: Uuid) -> Result<ProjectView, ProjectQueryError> {
            self.result.clone()
        }

        async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError> {
            unimplemented!("not used in single tests")
        }
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let service = GetSingleProjectService::new(MockProjectQuery {
            result: Err(ProjectQueryError::NotFound),
        });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(result, Err(GetSingleProjectError::NotFound)));
    }
}
