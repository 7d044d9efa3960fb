use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_user_projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub portfolio_user_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub project_id: Uuid,

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
        belongs_to = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity",
        from = "Column::ProjectId",
        to = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Projects,
}

impl Related<super::portfolio_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUsers.def()
    }
}

impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
