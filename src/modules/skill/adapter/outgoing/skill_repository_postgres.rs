use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillRecord, SkillRepository, SkillRepositoryError, UpdateSkillData,
};

use super::sea_orm_entity::skills::{
    ActiveModel as SkillActiveModel, Entity as SkillEntity, Model as SkillModel,
};

#[derive(Clone, Debug)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: SkillModel) -> SkillRecord {
        SkillRecord {
            id: model.id,
            name: model.name,
            level: model.level,
        }
    }

    fn map_db_err(e: sea_orm::DbErr) -> SkillRepositoryError {
        SkillRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create(&self, data: CreateSkillData) -> Result<SkillRecord, SkillRepositoryError> {
        let active_skill = SkillActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            level: Set(data.level),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_skill
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_record(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateSkillData,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let skill = SkillEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut active_skill: SkillActiveModel = skill.into();
        active_skill.name = Set(data.name);
        active_skill.level = Set(data.level);

        match active_skill.update(&*self.db).await {
            Ok(updated) => Ok(Self::map_to_record(updated)),
            Err(sea_orm::DbErr::RecordNotUpdated) => {
                // Re-check: a vanished row is NotFound, a still-present row
                // means another writer got there first.
                let still_exists = SkillEntity::find_by_id(id)
                    .count(&*self.db)
                    .await
                    .map_err(Self::map_db_err)?
                    > 0;

                if still_exists {
                    Err(SkillRepositoryError::ConcurrencyConflict)
                } else {
                    Err(SkillRepositoryError::NotFound)
                }
            }
            Err(e) => Err(Self::map_db_err(e)),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), SkillRepositoryError> {
        let skill = SkillEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        // Join rows cascade at the schema level
        skill.delete(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(())
    }
}
