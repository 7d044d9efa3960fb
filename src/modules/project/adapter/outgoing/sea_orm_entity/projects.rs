use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_user_projects, portfolio_users,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text")]
    pub image_url: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_user_projects::Entity"
    )]
    PortfolioUserProjects,
}

impl Related<portfolio_user_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUserProjects.def()
    }
}

// Many-to-many: projects <-> portfolio_users via portfolio_user_projects
impl Related<portfolio_users::Entity> for Entity {
    fn to() -> RelationDef {
        portfolio_user_projects::Relation::PortfolioUsers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(portfolio_user_projects::Relation::Projects.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::{ActiveValue, Set};

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        Ok(self)
    }
}
