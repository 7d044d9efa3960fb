use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::skill::application::use_cases::get_single_skill::GetSingleSkillError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/skills/{id}")]
pub async fn get_single_skill_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.get_single.execute(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetSingleSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(GetSingleSkillError::RepositoryError(msg)) => {
            error!("Failed to fetch skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
