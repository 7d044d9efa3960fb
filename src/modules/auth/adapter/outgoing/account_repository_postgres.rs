use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::account_repository::{
    AccountRepository, AccountRepositoryError, AccountResult, CreateAccountData,
};

use super::sea_orm_entity::accounts::{ActiveModel as AccountActiveModel, Model as AccountModel};

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_account_result(model: AccountModel) -> AccountResult {
        AccountResult {
            id: model.id,
            email: model.email,
            role: model.role,
        }
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(
        &self,
        account: CreateAccountData,
    ) -> Result<AccountResult, AccountRepositoryError> {
        let account_id = Uuid::new_v4();
        let active_account = AccountActiveModel {
            id: Set(account_id),
            email: Set(account.email),
            password_hash: Set(account.password_hash),
            role: Set("User".to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_account.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return AccountRepositoryError::EmailAlreadyRegistered;
            }
            AccountRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_account_result(inserted))
    }
}
