use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_attachment_repository::{
    ProjectAttachmentRepository, ProjectAttachmentRepositoryError,
};

#[derive(Clone)]
pub struct ProjectAttachmentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectAttachmentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Guarded insert:
    /// - both sides must exist
    /// - on conflict (portfolio_user_id, project_id) do nothing
    fn guarded_insert_stmt(portfolio_user_id: Uuid, project_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            INSERT INTO portfolio_user_projects (portfolio_user_id, project_id)
            SELECT u.id, p.id
            FROM portfolio_users u
            JOIN projects p
              ON p.id = $2
            WHERE u.id = $1
            ON CONFLICT (portfolio_user_id, project_id) DO NOTHING
            "#,
            vec![portfolio_user_id.into(), project_id.into()],
        )
    }

    /// Deterministic probe:
    /// - user_ok: portfolio user exists
    /// - project_ok: project exists
    /// - link_exists: pair already linked
    fn probe_stmt(portfolio_user_id: Uuid, project_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (
                SELECT 1
                FROM portfolio_users u
                WHERE u.id = $1
              ) AS user_ok,
              EXISTS (
                SELECT 1
                FROM projects p
                WHERE p.id = $2
              ) AS project_ok,
              EXISTS (
                SELECT 1
                FROM portfolio_user_projects up
                WHERE up.portfolio_user_id = $1
                  AND up.project_id = $2
              ) AS link_exists
            "#,
            vec![portfolio_user_id.into(), project_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> ProjectAttachmentRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            // A lost race against a concurrent attach of the same pair:
            // the primary key decided, this caller came second.
            return ProjectAttachmentRepositoryError::AlreadyAttached;
        }
        ProjectAttachmentRepositoryError::DatabaseError(e.to_string())
    }

    /// Resolve why the guarded insert affected 0 rows.
    /// Priority rule:
    /// 1) PortfolioUserNotFound
    /// 2) ProjectNotFound
    /// 3) link exists => AlreadyAttached (conflict, not success)
    async fn resolve_insert_failure<C>(
        conn: &C,
        portfolio_user_id: Uuid,
        project_id: Uuid,
    ) -> Result<(), ProjectAttachmentRepositoryError>
    where
        C: ConnectionTrait,
    {
        let row = conn
            .query_one(Self::probe_stmt(portfolio_user_id, project_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                ProjectAttachmentRepositoryError::DatabaseError(
                    "Probe query returned no rows".to_string(),
                )
            })?;

        let user_ok: bool = row.try_get("", "user_ok").unwrap_or(false);
        let project_ok: bool = row.try_get("", "project_ok").unwrap_or(false);
        let link_exists: bool = row.try_get("", "link_exists").unwrap_or(false);

        if !user_ok {
            return Err(ProjectAttachmentRepositoryError::PortfolioUserNotFound);
        }
        if !project_ok {
            return Err(ProjectAttachmentRepositoryError::ProjectNotFound);
        }
        if link_exists {
            return Err(ProjectAttachmentRepositoryError::AlreadyAttached);
        }

        Err(ProjectAttachmentRepositoryError::DatabaseError(
            "Unexpected insert resolution state".to_string(),
        ))
    }
}

#[async_trait]
impl ProjectAttachmentRepository for ProjectAttachmentRepositoryPostgres {
    async fn attach(
        &self,
        portfolio_user_id: Uuid,
        project_id: Uuid,
    ) -> Result<(), ProjectAttachmentRepositoryError> {
        let result = self
            .db
            .execute(Self::guarded_insert_stmt(portfolio_user_id, project_id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // 0 affected => either a side is missing or the pair already exists
        Self::resolve_insert_failure(&*self.db, portfolio_user_id, project_id).await
    }
}
