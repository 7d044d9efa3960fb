use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::skill::application::ports::outgoing::skill_query::{
    SkillQuery, SkillQueryError, SkillView,
};

use super::sea_orm_entity::skills::{self, Entity, Model};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

fn model_to_view(model: Model) -> SkillView {
    SkillView {
        id: model.id,
        name: model.name,
        level: model.level,
    }
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<SkillView, SkillQueryError> {
        let skill = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillQueryError::NotFound)?;

        Ok(model_to_view(skill))
    }

    async fn list(&self) -> Result<Vec<SkillView>, SkillQueryError> {
        let models = Entity::find()
            .order_by_asc(skills::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_view).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn skill(id: Uuid, name: &str) -> skills::Model {
        skills::Model {
            id,
            name: name.to_string(),
            level: "Beginner".to_string(),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_list_maps_views() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                skill(Uuid::new_v4(), "Go"),
                skill(Uuid::new_v4(), "SQL"),
            ]])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));

        let views = query.list().await.unwrap();

        assert_eq!(views.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<skills::Model>::new()])
            .into_connection();

        let query = SkillQueryPostgres::new(Arc::new(db));

        let res = query.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(res.unwrap_err(), SkillQueryError::NotFound));
    }
}
