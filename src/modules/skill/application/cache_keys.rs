use uuid::Uuid;

pub const SKILLS_CACHE_KEY: &str = "skills:all";
pub const SKILL_CACHE_KEY_PREFIX: &str = "skill:";
pub const CACHE_TTL_SECONDS: u64 = 30 * 60;

pub fn skill_key(id: Uuid) -> String {
    format!("{SKILL_CACHE_KEY_PREFIX}{id}")
}
