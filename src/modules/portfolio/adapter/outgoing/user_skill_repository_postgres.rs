use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolio_user_skills;
use crate::modules::portfolio::application::ports::outgoing::user_skill_repository::{
    UserSkillRepository, UserSkillRepositoryError,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;

/// Level assigned to skills created as a byproduct of linking.
const DEFAULT_SKILL_LEVEL: &str = "Beginner";

#[derive(Clone)]
pub struct UserSkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserSkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Idempotent link insert: the composite primary key is the final
    /// arbiter, a concurrent duplicate simply affects 0 rows.
    fn guarded_insert_stmt(portfolio_user_id: Uuid, skill_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO portfolio_user_skills (portfolio_user_id, skill_id)
            VALUES ($1, $2)
            ON CONFLICT (portfolio_user_id, skill_id) DO NOTHING
            "#,
            vec![portfolio_user_id.into(), skill_id.into()],
        )
    }

    fn user_probe_stmt(portfolio_user_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM portfolio_users u
                WHERE u.id = $1
            ) AS user_ok
            "#,
            vec![portfolio_user_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> UserSkillRepositoryError {
        UserSkillRepositoryError::DatabaseError(e.to_string())
    }

    async fn ensure_user_ok<C>(
        conn: &C,
        portfolio_user_id: Uuid,
    ) -> Result<(), UserSkillRepositoryError>
    where
        C: ConnectionTrait,
    {
        let row = conn
            .query_one(Self::user_probe_stmt(portfolio_user_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                UserSkillRepositoryError::DatabaseError(
                    "User existence probe returned no rows".to_string(),
                )
            })?;

        let user_ok: bool = row.try_get("", "user_ok").unwrap_or(false);
        if !user_ok {
            return Err(UserSkillRepositoryError::UserNotFound);
        }
        Ok(())
    }

    /// Resolve a name against the whole skills table (not just this user's
    /// links) by lower(name); create the skill when no spelling matches.
    async fn resolve_or_create_skill<C>(
        conn: &C,
        name: &str,
    ) -> Result<Uuid, UserSkillRepositoryError>
    where
        C: ConnectionTrait,
    {
        let lowered = name.to_lowercase();

        let existing = skills::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(skills::Column::Name))).eq(lowered))
            .one(conn)
            .await
            .map_err(Self::map_db_err)?;

        if let Some(skill) = existing {
            return Ok(skill.id);
        }

        let skill_id = Uuid::new_v4();
        let active_skill = skills::ActiveModel {
            id: Set(skill_id),
            name: Set(name.to_string()),
            level: Set(DEFAULT_SKILL_LEVEL.to_string()),
            created_at: NotSet,
            updated_at: NotSet,
        };

        active_skill.insert(conn).await.map_err(Self::map_db_err)?;

        Ok(skill_id)
    }
}

#[async_trait]
impl UserSkillRepository for UserSkillRepositoryPostgres {
    async fn set_user_skills(
        &self,
        portfolio_user_id: Uuid,
        names: Vec<String>,
    ) -> Result<(), UserSkillRepositoryError> {
        // One unit of work for lookup/create/unlink/link: a crash can no
        // longer strand a freshly created skill without its link.
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::ensure_user_ok(&txn, portfolio_user_id).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        let mut target_ids = Vec::with_capacity(names.len());
        for name in &names {
            match Self::resolve_or_create_skill(&txn, name).await {
                Ok(skill_id) => target_ids.push(skill_id),
                Err(e) => {
                    let _ = txn.rollback().await;
                    return Err(e);
                }
            }
        }

        // Drop links whose skill is no longer in the target set. Skills
        // themselves are never deleted here; the vocabulary only grows.
        let stale_delete = portfolio_user_skills::Entity::delete_many()
            .filter(portfolio_user_skills::Column::PortfolioUserId.eq(portfolio_user_id))
            .filter(portfolio_user_skills::Column::SkillId.is_not_in(target_ids.clone()))
            .exec(&txn)
            .await;

        if let Err(e) = stale_delete {
            let _ = txn.rollback().await;
            return Err(Self::map_db_err(e));
        }

        for skill_id in target_ids {
            if let Err(e) = txn
                .execute(Self::guarded_insert_stmt(portfolio_user_id, skill_id))
                .await
            {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(())
    }
}
