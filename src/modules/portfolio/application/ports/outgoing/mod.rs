pub mod portfolio_user_query;
pub mod portfolio_user_repository;
pub mod user_skill_repository;

pub use portfolio_user_query::{
    AttachedProjectView, AttachedSkillView, PortfolioUserQuery, PortfolioUserQueryError,
    PortfolioUserSummary, PortfolioUserView,
};
pub use portfolio_user_repository::{
    CreatePortfolioUserData, PortfolioUserRecord, PortfolioUserRepository,
    PortfolioUserRepositoryError, UpdatePortfolioUserData,
};
pub use user_skill_repository::{UserSkillRepository, UserSkillRepositoryError};
