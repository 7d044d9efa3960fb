use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::account_query::{
    AccountQuery, AccountQueryError, AccountRecord,
};
use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_users;

use super::sea_orm_entity::accounts::{self, Model as AccountModel};

#[derive(Clone)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: sea_orm::DbErr) -> AccountQueryError {
        AccountQueryError::DatabaseError(e.to_string())
    }

    /// Fetch the linked profile id, if any, for a resolved account.
    async fn linked_profile_id(&self, account_id: Uuid) -> Result<Option<Uuid>, AccountQueryError> {
        let profile = portfolio_users::Entity::find()
            .filter(portfolio_users::Column::AccountId.eq(account_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(profile.map(|p| p.id))
    }

    async fn to_record(&self, model: AccountModel) -> Result<AccountRecord, AccountQueryError> {
        let portfolio_user_id = self.linked_profile_id(model.id).await?;

        Ok(AccountRecord {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            role: model.role,
            portfolio_user_id,
        })
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AccountRecord>, AccountQueryError> {
        let normalized = email.trim().to_lowercase();

        let account = accounts::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(accounts::Column::Email))).eq(normalized),
            )
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match account {
            Some(model) => Ok(Some(self.to_record(model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AccountRecord>, AccountQueryError> {
        let account = accounts::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match account {
            Some(model) => Ok(Some(self.to_record(model).await?)),
            None => Ok(None),
        }
    }
}
