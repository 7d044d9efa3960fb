use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::profile_link_repository::{
    ProfileLinkRepository, ProfileLinkRepositoryError, ProfileLinkState,
};
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_users;

#[derive(Clone)]
pub struct ProfileLinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileLinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Guarded link write: only an unlinked profile (or one already linked
    /// to this same account) accepts the update. The partial unique index
    /// on account_id backs this up against concurrent claims.
    fn guarded_link_stmt(portfolio_user_id: Uuid, account_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            UPDATE portfolio_users
            SET account_id = $2
            WHERE id = $1
              AND (account_id IS NULL OR account_id = $2)
            "#,
            vec![portfolio_user_id.into(), account_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> ProfileLinkRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return ProfileLinkRepositoryError::AccountAlreadyLinked;
        }
        ProfileLinkRepositoryError::DatabaseError(e.to_string())
    }

    /// Resolve why the guarded update affected 0 rows.
    async fn resolve_link_failure(
        &self,
        portfolio_user_id: Uuid,
    ) -> Result<(), ProfileLinkRepositoryError> {
        match self.profile_link_state(portfolio_user_id).await? {
            None => Err(ProfileLinkRepositoryError::ProfileNotFound),
            Some(ProfileLinkState::LinkedTo(_)) => {
                Err(ProfileLinkRepositoryError::ProfileAlreadyClaimed)
            }
            Some(ProfileLinkState::Unlinked) => Err(ProfileLinkRepositoryError::DatabaseError(
                "Unexpected link resolution state".to_string(),
            )),
        }
    }
}

#[async_trait]
impl ProfileLinkRepository for ProfileLinkRepositoryPostgres {
    async fn profile_link_state(
        &self,
        portfolio_user_id: Uuid,
    ) -> Result<Option<ProfileLinkState>, ProfileLinkRepositoryError> {
        let profile = portfolio_users::Entity::find_by_id(portfolio_user_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(profile.map(|p| match p.account_id {
            Some(account_id) => ProfileLinkState::LinkedTo(account_id),
            None => ProfileLinkState::Unlinked,
        }))
    }

    async fn linked_profile_for_account(
        &self,
        account_id: Uuid,
    ) -> Result<Option<Uuid>, ProfileLinkRepositoryError> {
        let profile = portfolio_users::Entity::find()
            .filter(portfolio_users::Column::AccountId.eq(account_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(profile.map(|p| p.id))
    }

    async fn link_account(
        &self,
        portfolio_user_id: Uuid,
        account_id: Uuid,
    ) -> Result<(), ProfileLinkRepositoryError> {
        let result = self
            .db
            .execute(Self::guarded_link_stmt(portfolio_user_id, account_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // 0 affected: the profile vanished or someone else claimed it first
        self.resolve_link_failure(portfolio_user_id).await
    }
}
