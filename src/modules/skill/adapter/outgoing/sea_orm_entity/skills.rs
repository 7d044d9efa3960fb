use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_user_skills, portfolio_users,
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    // Unique ignoring case by convention; reconciliation matches lower(name)
    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub level: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_user_skills::Entity"
    )]
    PortfolioUserSkills,
}

impl Related<portfolio_user_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUserSkills.def()
    }
}

// Many-to-many: skills <-> portfolio_users via portfolio_user_skills
impl Related<portfolio_users::Entity> for Entity {
    fn to() -> RelationDef {
        portfolio_user_skills::Relation::PortfolioUsers.def()
    }

    fn via() -> Option<RelationDef> {
        Some(portfolio_user_skills::Relation::Skills.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use sea_orm::{ActiveValue, Set};

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}
