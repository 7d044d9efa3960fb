use std::sync::Arc;

use crate::modules::auth::application::use_cases::{
    link_portfolio_user::LinkPortfolioUserUseCase, login_account::LoginUseCase,
    register_account::RegisterAccountUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub register: Arc<dyn RegisterAccountUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
    pub link_portfolio_user: Arc<dyn LinkPortfolioUserUseCase + Send + Sync>,
}
