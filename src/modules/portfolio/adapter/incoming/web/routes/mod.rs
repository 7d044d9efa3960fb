mod create_portfolio_user;
mod delete_portfolio_user;
mod get_portfolio_user;
mod get_portfolio_users;
mod get_unlinked_portfolio_users;
mod get_user_projects;
mod get_user_skills;
mod set_user_skills;
mod update_portfolio_user;

pub use create_portfolio_user::create_portfolio_user_handler;
pub use delete_portfolio_user::delete_portfolio_user_handler;
pub use get_portfolio_user::get_portfolio_user_handler;
pub use get_portfolio_users::get_portfolio_users_handler;
pub use get_unlinked_portfolio_users::get_unlinked_portfolio_users_handler;
pub use get_user_projects::get_user_projects_handler;
pub use get_user_skills::get_user_skills_handler;
pub use set_user_skills::set_user_skills_handler;
pub use update_portfolio_user::update_portfolio_user_handler;
