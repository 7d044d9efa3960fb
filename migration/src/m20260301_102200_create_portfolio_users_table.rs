use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create portfolio_users table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(PortfolioUsers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PortfolioUsers::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PortfolioUsers::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PortfolioUsers::Bio).text().not_null())
                    .col(
                        ColumnDef::new(PortfolioUsers::ProfileImageUrl)
                            .text()
                            .not_null(),
                    )
                    // Nullable link to the authenticated account. Restrict on
                    // delete: removing a profile never removes the account,
                    // and an account with a profile cannot be dropped first.
                    .col(ColumnDef::new(PortfolioUsers::AccountId).uuid())
                    .col(
                        ColumnDef::new(PortfolioUsers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(PortfolioUsers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_portfolio_users_account_id")
                            .from(PortfolioUsers::Table, PortfolioUsers::AccountId)
                            .to(Accounts::Table, Accounts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // At most one profile per account
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_portfolio_users_account_id
                ON portfolio_users (account_id)
                WHERE account_id IS NOT NULL;
                "#,
            )
            .await?;

        // Unlinked-profile listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_portfolio_users_unlinked
                ON portfolio_users (created_at DESC)
                WHERE account_id IS NULL;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_portfolio_users_updated_at
                BEFORE UPDATE ON portfolio_users
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_portfolio_users_updated_at ON portfolio_users;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_portfolio_users_account_id;
                DROP INDEX IF EXISTS idx_portfolio_users_unlinked;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortfolioUsers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PortfolioUsers {
    Table,
    Id,
    Name,
    Bio,
    ProfileImageUrl,
    AccountId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
