use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create portfolio_user_projects join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioUserProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioUserProjects::PortfolioUserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioUserProjects::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioUserProjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key: one row per (user, project) pair
                    .primary_key(
                        Index::create()
                            .col(PortfolioUserProjects::PortfolioUserId)
                            .col(PortfolioUserProjects::ProjectId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_user_projects_portfolio_user_id")
                            .from(
                                PortfolioUserProjects::Table,
                                PortfolioUserProjects::PortfolioUserId,
                            )
                            .to(PortfolioUsers::Table, PortfolioUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_user_projects_project_id")
                            .from(
                                PortfolioUserProjects::Table,
                                PortfolioUserProjects::ProjectId,
                            )
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all users for a project (the PK covers the reverse)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_portfolio_user_projects_project_id
                ON portfolio_user_projects (project_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_portfolio_user_projects_project_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioUserProjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioUserProjects {
    Table,
    PortfolioUserId,
    ProjectId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PortfolioUsers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
