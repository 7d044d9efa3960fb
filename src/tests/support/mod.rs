pub mod app_state_builder;
pub mod auth_helper;
pub mod cache_stub;
pub mod portfolio_test_fixtures;
pub mod stubs;
