pub mod project_attachment_repository_postgres;
pub mod project_query_postgres;
pub mod project_repository_postgres;
pub mod sea_orm_entity;
