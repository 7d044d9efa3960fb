use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create portfolio_user_skills join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioUserSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioUserSkills::PortfolioUserId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioUserSkills::SkillId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PortfolioUserSkills::Proficiency)
                            .string_len(50)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(PortfolioUserSkills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key: one row per (user, skill) pair
                    .primary_key(
                        Index::create()
                            .col(PortfolioUserSkills::PortfolioUserId)
                            .col(PortfolioUserSkills::SkillId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_user_skills_portfolio_user_id")
                            .from(
                                PortfolioUserSkills::Table,
                                PortfolioUserSkills::PortfolioUserId,
                            )
                            .to(PortfolioUsers::Table, PortfolioUsers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_user_skills_skill_id")
                            .from(PortfolioUserSkills::Table, PortfolioUserSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all users holding a skill (the PK covers the reverse)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_portfolio_user_skills_skill_id
                ON portfolio_user_skills (skill_id);
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
                DROP INDEX IF EXISTS idx_portfolio_user_skills_skill_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioUserSkills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioUserSkills {
    Table,
    PortfolioUserId,
    SkillId,
    Proficiency,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PortfolioUsers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}
