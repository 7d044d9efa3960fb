use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_user_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub portfolio_user_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub skill_id: Uuid,

    // Optional per-link metadata, empty when unset
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub proficiency: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::portfolio_users::Entity",
        from = "Column::PortfolioUserId",
        to = "super::portfolio_users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    PortfolioUsers,

    #[sea_orm(
        belongs_to = "crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::Entity",
        from = "Column::SkillId",
        to = "crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Skills,
}

impl Related<super::portfolio_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUsers.def()
    }
}

impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
