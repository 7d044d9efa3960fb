pub use sea_orm_migration::prelude::*;

mod m20260301_101500_create_accounts_table;
mod m20260301_102200_create_portfolio_users_table;
mod m20260301_103000_create_projects_table;
mod m20260301_103400_create_skills_table;
mod m20260301_104100_create_portfolio_user_projects_table;
mod m20260301_104700_create_portfolio_user_skills_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_101500_create_accounts_table::Migration),
            Box::new(m20260301_102200_create_portfolio_users_table::Migration),
            Box::new(m20260301_103000_create_projects_table::Migration),
            Box::new(m20260301_103400_create_skills_table::Migration),
            Box::new(m20260301_104100_create_portfolio_user_projects_table::Migration),
            Box::new(m20260301_104700_create_portfolio_user_skills_table::Migration),
        ]
    }
}
