use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::{
    portfolio_user_projects, portfolio_user_skills, portfolio_users,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_user_query::{
    AttachedProjectView, AttachedSkillView, PortfolioUserQuery, PortfolioUserQueryError,
    PortfolioUserSummary, PortfolioUserView,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioUserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioUserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Load the projects attached to one user. Join rows whose project has
    /// since been deleted are dropped rather than failing the aggregate.
    async fn load_attached_projects(
        &self,
        portfolio_user_id: Uuid,
    ) -> Result<Vec<AttachedProjectView>, PortfolioUserQueryError> {
        let join_rows = portfolio_user_projects::Entity::find()
            .filter(portfolio_user_projects::Column::PortfolioUserId.eq(portfolio_user_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if join_rows.is_empty() {
            return Ok(Vec::new());
        }

        let project_ids: Vec<Uuid> = join_rows.iter().map(|row| row.project_id).collect();

        let related = projects::Entity::find()
            .filter(projects::Column::Id.is_in(project_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let by_id: HashMap<Uuid, projects::Model> =
            related.into_iter().map(|p| (p.id, p)).collect();

        Ok(join_rows
            .iter()
            .filter_map(|row| by_id.get(&row.project_id))
            .map(|project| AttachedProjectView {
                id: project.id,
                title: project.title.clone(),
                description: project.description.clone(),
                image_url: project.image_url.clone(),
            })
            .collect())
    }

    /// Same defensive shape for skills.
    async fn load_attached_skills(
        &self,
        portfolio_user_id: Uuid,
    ) -> Result<Vec<AttachedSkillView>, PortfolioUserQueryError> {
        let join_rows = portfolio_user_skills::Entity::find()
            .filter(portfolio_user_skills::Column::PortfolioUserId.eq(portfolio_user_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if join_rows.is_empty() {
            return Ok(Vec::new());
        }

        let skill_ids: Vec<Uuid> = join_rows.iter().map(|row| row.skill_id).collect();

        let related = skills::Entity::find()
            .filter(skills::Column::Id.is_in(skill_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let by_id: HashMap<Uuid, skills::Model> = related.into_iter().map(|s| (s.id, s)).collect();

        Ok(join_rows
            .iter()
            .filter_map(|row| by_id.get(&row.skill_id))
            .map(|skill| AttachedSkillView {
                id: skill.id,
                name: skill.name.clone(),
                level: skill.level.clone(),
            })
            .collect())
    }

    async fn aggregate(
        &self,
        user: portfolio_users::Model,
    ) -> Result<PortfolioUserView, PortfolioUserQueryError> {
        let projects = self.load_attached_projects(user.id).await?;
        let skills = self.load_attached_skills(user.id).await?;

        Ok(PortfolioUserView {
            id: user.id,
            name: user.name,
            bio: user.bio,
            profile_image_url: user.profile_image_url,
            projects,
            skills,
        })
    }
}

#[async_trait]
impl PortfolioUserQuery for PortfolioUserQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<PortfolioUserView, PortfolioUserQueryError> {
        let user = portfolio_users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioUserQueryError::NotFound)?;

        self.aggregate(user).await
    }

    async fn list(&self) -> Result<Vec<PortfolioUserView>, PortfolioUserQueryError> {
        let users = portfolio_users::Entity::find()
            .order_by_asc(portfolio_users::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut views = Vec::with_capacity(users.len());
        for user in users {
            views.push(self.aggregate(user).await?);
        }

        Ok(views)
    }

    async fn list_unlinked(&self) -> Result<Vec<PortfolioUserSummary>, PortfolioUserQueryError> {
        let users = portfolio_users::Entity::find()
            .filter(portfolio_users::Column::AccountId.is_null())
            .order_by_asc(portfolio_users::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users
            .into_iter()
            .map(|user| PortfolioUserSummary {
                id: user.id,
                name: user.name,
                bio: user.bio,
                profile_image_url: user.profile_image_url,
            })
            .collect())
    }

    async fn get_user_projects(
        &self,
        id: Uuid,
    ) -> Result<Vec<AttachedProjectView>, PortfolioUserQueryError> {
        let user = portfolio_users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioUserQueryError::NotFound)?;

        self.load_attached_projects(user.id).await
    }

    async fn get_user_skills(
        &self,
        id: Uuid,
    ) -> Result<Vec<AttachedSkillView>, PortfolioUserQueryError> {
        let user = portfolio_users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PortfolioUserQueryError::NotFound)?;

        self.load_attached_skills(user.id).await
    }
}

fn map_db_err(e: DbErr) -> PortfolioUserQueryError {
    PortfolioUserQueryError::DatabaseError(e.to_string())
}
