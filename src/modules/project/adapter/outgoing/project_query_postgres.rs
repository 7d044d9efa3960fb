use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectView,
};

use super::sea_orm_entity::projects::{self, Entity, Model};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

fn model_to_view(model: Model) -> ProjectView {
    ProjectView {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let project = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        Ok(model_to_view(project))
    }

    async fn list(&self) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_asc(projects::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }
}
