pub mod link_portfolio_user;
pub mod login_account;
pub mod register_account;
