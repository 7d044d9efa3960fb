use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_users")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text")]
    pub profile_image_url: String,

    // Nullable 1:1 link to the authenticated account. At most one profile
    // per account (partial unique index on the column).
    #[sea_orm(column_type = "Uuid", nullable)]
    pub account_id: Option<Uuid>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::accounts::Entity",
        from = "Column::AccountId",
        to = "crate::modules::auth::adapter::outgoing::sea_orm_entity::accounts::Column::Id",
        on_delete = "Restrict",
        on_update = "Cascade"
    )]
    Accounts,

    #[sea_orm(has_many = "super::portfolio_user_projects::Entity")]
    PortfolioUserProjects,

    #[sea_orm(has_many = "super::portfolio_user_skills::Entity")]
    PortfolioUserSkills,
}

impl Related<crate::modules::auth::adapter::outgoing::sea_orm_entity::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

impl Related<super::portfolio_user_projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUserProjects.def()
    }
}

impl Related<super::portfolio_user_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PortfolioUserSkills.def()
    }
}

// Many-to-many: portfolio_users <-> projects via portfolio_user_projects
impl Related<projects::Entity> for Entity {
    fn to() -> RelationDef {
        super::portfolio_user_projects::Relation::Projects.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::portfolio_user_projects::Relation::PortfolioUsers
                .def()
                .rev(),
        )
    }
}

// Many-to-many: portfolio_users <-> skills via portfolio_user_skills
impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::portfolio_user_skills::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::portfolio_user_skills::Relation::PortfolioUsers
                .def()
                .rev(),
        )
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
