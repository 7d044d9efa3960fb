pub mod skill_query;
pub mod skill_repository;
pub mod value_cache;

pub use skill_query::{SkillQuery, SkillQueryError, SkillView};
pub use skill_repository::{
    CreateSkillData, SkillRecord, SkillRepository, SkillRepositoryError, UpdateSkillData,
};
pub use value_cache::{ValueCache, ValueCacheError};
