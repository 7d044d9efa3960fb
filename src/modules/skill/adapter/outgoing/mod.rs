pub mod sea_orm_entity;
pub mod skill_query_postgres;
pub mod skill_repository_postgres;
pub mod value_cache_redis;
