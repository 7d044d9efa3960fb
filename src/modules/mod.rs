pub mod auth;
pub mod portfolio;
pub mod project;
pub mod skill;
