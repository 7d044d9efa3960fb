mod link_portfolio_user;
mod login_account;
mod register_account;

pub use link_portfolio_user::link_portfolio_user_handler;
pub use login_account::login_account_handler;
pub use register_account::register_account_handler;
