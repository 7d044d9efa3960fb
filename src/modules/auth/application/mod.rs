pub mod account_use_cases;
pub mod ports;
pub mod use_cases;
