use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectRecord, ProjectRepository, ProjectRepositoryError, UpdateProjectData,
};

use super::sea_orm_entity::projects::{
    ActiveModel as ProjectActiveModel, Entity as ProjectEntity, Model as ProjectModel,
};

#[derive(Clone, Debug)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: ProjectModel) -> ProjectRecord {
        ProjectRecord {
            id: model.id,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
        }
    }

    fn map_db_err(e: sea_orm::DbErr) -> ProjectRepositoryError {
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let active_project = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            image_url: Set(data.image_url),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_project
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_record(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateProjectData,
    ) -> Result<ProjectRecord, ProjectRepositoryError> {
        let project = ProjectEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut active_project: ProjectActiveModel = project.into();
        active_project.title = Set(data.title);
        active_project.description = Set(data.description);
        active_project.image_url = Set(data.image_url);

        let updated = active_project.update(&*self.db).await.map_err(|e| {
            if matches!(e, sea_orm::DbErr::RecordNotUpdated) {
                ProjectRepositoryError::NotFound
            } else {
                Self::map_db_err(e)
            }
        })?;

        Ok(Self::map_to_record(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let project = ProjectEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        project.delete(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(())
    }
}
