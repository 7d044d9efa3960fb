use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::portfolio_user_repository::{
    CreatePortfolioUserData, PortfolioUserRecord, PortfolioUserRepository,
    PortfolioUserRepositoryError, UpdatePortfolioUserData,
};

use super::sea_orm_entity::portfolio_users::{
    ActiveModel as PortfolioUserActiveModel, Entity as PortfolioUserEntity,
    Model as PortfolioUserModel,
};

#[derive(Clone, Debug)]
pub struct PortfolioUserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioUserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_record(model: PortfolioUserModel) -> PortfolioUserRecord {
        PortfolioUserRecord {
            id: model.id,
            name: model.name,
            bio: model.bio,
            profile_image_url: model.profile_image_url,
            account_id: model.account_id,
        }
    }

    fn map_db_err(e: sea_orm::DbErr) -> PortfolioUserRepositoryError {
        PortfolioUserRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl PortfolioUserRepository for PortfolioUserRepositoryPostgres {
    async fn create(
        &self,
        data: CreatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, PortfolioUserRepositoryError> {
        let active_user = PortfolioUserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            bio: Set(data.bio),
            profile_image_url: Set(data.profile_image_url),
            account_id: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(Self::map_to_record(inserted))
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdatePortfolioUserData,
    ) -> Result<PortfolioUserRecord, PortfolioUserRepositoryError> {
        let user = PortfolioUserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(PortfolioUserRepositoryError::NotFound)?;

        let mut active_user: PortfolioUserActiveModel = user.into();
        active_user.name = Set(data.name);
        active_user.bio = Set(data.bio);
        active_user.profile_image_url = Set(data.profile_image_url);

        let updated = active_user.update(&*self.db).await.map_err(|e| {
            // The row can vanish between the read and the write; report that
            // as missing rather than a storage fault.
            if matches!(e, sea_orm::DbErr::RecordNotUpdated) {
                PortfolioUserRepositoryError::NotFound
            } else {
                Self::map_db_err(e)
            }
        })?;

        Ok(Self::map_to_record(updated))
    }

    async fn delete(&self, id: Uuid) -> Result<(), PortfolioUserRepositoryError> {
        let user = PortfolioUserEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(PortfolioUserRepositoryError::NotFound)?;

        // Join rows cascade at the schema level; the linked account stays.
        user.delete(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(())
    }
}
