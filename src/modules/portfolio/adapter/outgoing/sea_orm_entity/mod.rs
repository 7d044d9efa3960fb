pub mod portfolio_user_projects;
pub mod portfolio_user_skills;
pub mod portfolio_users;
