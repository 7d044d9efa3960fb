pub mod cache_keys;
pub mod ports;
pub mod skill_use_cases;
pub mod use_cases;
