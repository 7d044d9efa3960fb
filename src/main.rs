pub mod modules;
pub use modules::auth;
pub use modules::portfolio;
pub use modules::project;
pub use modules::skill;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::account_query_postgres::AccountQueryPostgres;
use crate::auth::adapter::outgoing::account_repository_postgres::AccountRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::profile_link_repository_postgres::ProfileLinkRepositoryPostgres;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::account_use_cases::AccountUseCases;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    link_portfolio_user::LinkPortfolioUserService, login_account::LoginService,
    register_account::RegisterAccountService,
};

use crate::portfolio::adapter::outgoing::portfolio_user_query_postgres::PortfolioUserQueryPostgres;
use crate::portfolio::adapter::outgoing::portfolio_user_repository_postgres::PortfolioUserRepositoryPostgres;
use crate::portfolio::adapter::outgoing::user_skill_repository_postgres::UserSkillRepositoryPostgres;
use crate::portfolio::application::portfolio_use_cases::PortfolioUseCases;
use crate::portfolio::application::use_cases::{
    create_portfolio_user::CreatePortfolioUserService,
    delete_portfolio_user::DeletePortfolioUserService, get_portfolio_user::GetPortfolioUserService,
    get_portfolio_users::GetPortfolioUsersService,
    get_unlinked_portfolio_users::GetUnlinkedPortfolioUsersService,
    get_user_relations::GetUserRelationsService, set_user_skills::SetUserSkillsService,
    update_portfolio_user::UpdatePortfolioUserService,
};

use crate::project::adapter::outgoing::project_attachment_repository_postgres::ProjectAttachmentRepositoryPostgres;
use crate::project::adapter::outgoing::project_query_postgres::ProjectQueryPostgres;
use crate::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::project::application::use_cases::{
    attach_project::AttachProjectService, create_project::CreateProjectService,
    delete_project::DeleteProjectService, get_projects::GetProjectsService,
    get_single_project::GetSingleProjectService, update_project::UpdateProjectService,
};

use crate::skill::adapter::outgoing::skill_query_postgres::SkillQueryPostgres;
use crate::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::skill::adapter::outgoing::value_cache_redis::ValueCacheRedis;
use crate::skill::application::ports::outgoing::value_cache::ValueCache;
use crate::skill::application::skill_use_cases::SkillUseCases;
use crate::skill::application::use_cases::{
    create_skill::CreateSkillService, delete_skill::DeleteSkillService,
    get_single_skill::GetSingleSkillService, get_skills::GetSkillsService,
    update_skill::UpdateSkillService,
};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
    pub portfolio: PortfolioUseCases,
    pub project: ProjectUseCases,
    pub skill: SkillUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");

    let redis_arc = Arc::new(redis_pool);

    // Shared services
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Arc::new(Argon2Hasher::from_env());
    let value_cache: Arc<dyn ValueCache + Send + Sync> =
        Arc::new(ValueCacheRedis::new(Arc::clone(&redis_arc)));

    // Account wiring
    let account_repo = AccountRepositoryPostgres::new(Arc::clone(&db_arc));
    let account_query = AccountQueryPostgres::new(Arc::clone(&db_arc));
    let profile_link_repo = ProfileLinkRepositoryPostgres::new(Arc::clone(&db_arc));

    let account = AccountUseCases {
        register: Arc::new(RegisterAccountService::new(
            account_repo,
            password_hasher.clone(),
        )),
        login: Arc::new(LoginService::new(
            account_query.clone(),
            password_hasher,
            Arc::new(jwt_service.clone()),
        )),
        link_portfolio_user: Arc::new(LinkPortfolioUserService::new(
            profile_link_repo,
            account_query,
            Arc::new(jwt_service.clone()),
        )),
    };

    // Portfolio wiring
    let portfolio_repo = PortfolioUserRepositoryPostgres::new(Arc::clone(&db_arc));
    let portfolio_query = PortfolioUserQueryPostgres::new(Arc::clone(&db_arc));
    let user_skill_repo = UserSkillRepositoryPostgres::new(Arc::clone(&db_arc));

    let portfolio = PortfolioUseCases {
        create: Arc::new(CreatePortfolioUserService::new(portfolio_repo.clone())),
        update: Arc::new(UpdatePortfolioUserService::new(portfolio_repo.clone())),
        delete: Arc::new(DeletePortfolioUserService::new(portfolio_repo)),
        get_single: Arc::new(GetPortfolioUserService::new(portfolio_query.clone())),
        get_list: Arc::new(GetPortfolioUsersService::new(portfolio_query.clone())),
        get_unlinked: Arc::new(GetUnlinkedPortfolioUsersService::new(
            portfolio_query.clone(),
        )),
        get_user_projects: Arc::new(GetUserRelationsService::new(portfolio_query.clone())),
        get_user_skills: Arc::new(GetUserRelationsService::new(portfolio_query)),
        set_skills: Arc::new(SetUserSkillsService::new(user_skill_repo)),
    };

    // Project wiring
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let attachment_repo = ProjectAttachmentRepositoryPostgres::new(Arc::clone(&db_arc));

    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
        get_list: Arc::new(GetProjectsService::new(project_query.clone())),
        get_single: Arc::new(GetSingleProjectService::new(project_query)),
        attach: Arc::new(AttachProjectService::new(attachment_repo)),
    };

    // Skill wiring
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_query = SkillQueryPostgres::new(Arc::clone(&db_arc));

    let skill = SkillUseCases {
        create: Arc::new(CreateSkillService::new(
            skill_repo.clone(),
            value_cache.clone(),
        )),
        update: Arc::new(UpdateSkillService::new(
            skill_repo.clone(),
            value_cache.clone(),
        )),
        delete: Arc::new(DeleteSkillService::new(skill_repo, value_cache.clone())),
        get_list: Arc::new(GetSkillsService::new(
            skill_query.clone(),
            value_cache.clone(),
        )),
        get_single: Arc::new(GetSingleSkillService::new(skill_query, value_cache)),
    };

    let state = AppState {
        account,
        portfolio,
        project,
        skill,
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(crate::shared::api::json_config::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Accounts
    cfg.service(crate::auth::adapter::incoming::web::routes::register_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_account_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::link_portfolio_user_handler);
    // Portfolio users. "unlinked" is registered before "{id}" so the
    // literal segment wins the match.
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::get_unlinked_portfolio_users_handler,
    );
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_users_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_user_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::create_portfolio_user_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_portfolio_user_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::delete_portfolio_user_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_user_projects_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_user_skills_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::set_user_skills_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::attach_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_single_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::delete_project_handler);
    // Skills
    cfg.service(crate::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::get_single_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::skill::adapter::incoming::web::routes::delete_skill_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
