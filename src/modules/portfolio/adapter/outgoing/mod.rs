pub mod portfolio_user_query_postgres;
pub mod portfolio_user_repository_postgres;
pub mod sea_orm_entity;
pub mod user_skill_repository_postgres;
