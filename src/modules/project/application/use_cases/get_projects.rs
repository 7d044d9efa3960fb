use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError>;
}

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectView>, GetProjectsError> {
        self.query.list().await.map_err(|e| match e {
            ProjectQueryError::NotFound | ProjectQueryError::DatabaseError(_) => {
                GetProjectsError::RepositoryError(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct MockProjectQuery {
        views: Vec<ProjectView>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn get_by_id(&self, _id: Uuid) -> Result<ProjectView, ProjectQueryError> {
            unimplemented!("not used in list tests")
        }

        async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError> {
            Ok(self.views.clone())
        }
    }

    #[tokio::test]
    async fn execute_returns_views() {
        let service = GetProjectsService::new(MockProjectQuery {
            views: vec![ProjectView {
                id: Uuid::new_v4(),
                title: "Portfolio site".to_string(),
                description: "Static site".to_string(),
                image_url: "https://example.com/p.png".to_string(),
            }],
        });

        let result = service.execute().await.unwrap();

        assert_eq!(result.len(), 1);
    }
}
