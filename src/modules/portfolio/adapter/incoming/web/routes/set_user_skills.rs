use actix_web::{put, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::portfolio::application::use_cases::set_user_skills::SetUserSkillsError;
use crate::{shared::api::ApiResponse, AppState};

#[put("/api/portfolio-users/{id}/skills")]
pub async fn set_user_skills_handler(
    _account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    body: web::Json<Vec<String>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_user_id = path.into_inner();

    match data
        .portfolio
        .set_skills
        .execute(portfolio_user_id, body.into_inner())
        .await
    {
        Ok(_) => ApiResponse::message("Skills updated"),

        Err(SetUserSkillsError::UserNotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(SetUserSkillsError::EmptySkillSet) => {
            ApiResponse::bad_request("EMPTY_SKILL_SET", "Skill list cannot be empty")
        }

        Err(SetUserSkillsError::RepositoryError(msg)) => {
            error!("Failed to update skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
