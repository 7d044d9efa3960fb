pub mod create_portfolio_user;
pub mod delete_portfolio_user;
pub mod get_portfolio_user;
pub mod get_portfolio_users;
pub mod get_unlinked_portfolio_users;
pub mod get_user_relations;
pub mod set_user_skills;
pub mod update_portfolio_user;
