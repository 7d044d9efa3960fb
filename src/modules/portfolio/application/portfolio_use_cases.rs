use std::sync::Arc;

use crate::modules::portfolio::application::use_cases::{
    create_portfolio_user::CreatePortfolioUserUseCase,
    delete_portfolio_user::DeletePortfolioUserUseCase, get_portfolio_user::GetPortfolioUserUseCase,
    get_portfolio_users::GetPortfolioUsersUseCase,
    get_unlinked_portfolio_users::GetUnlinkedPortfolioUsersUseCase,
    get_user_relations::{GetUserProjectsUseCase, GetUserSkillsUseCase},
    set_user_skills::SetUserSkillsUseCase, update_portfolio_user::UpdatePortfolioUserUseCase,
};

#[derive(Clone)]
pub struct PortfolioUseCases {
    pub create: Arc<dyn CreatePortfolioUserUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePortfolioUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePortfolioUserUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPortfolioUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPortfolioUsersUseCase + Send + Sync>,
    pub get_unlinked: Arc<dyn GetUnlinkedPortfolioUsersUseCase + Send + Sync>,
    pub get_user_projects: Arc<dyn GetUserProjectsUseCase + Send + Sync>,
    pub get_user_skills: Arc<dyn GetUserSkillsUseCase + Send + Sync>,
    pub set_skills: Arc<dyn SetUserSkillsUseCase + Send + Sync>,
}
