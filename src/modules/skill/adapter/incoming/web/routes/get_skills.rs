use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::use_cases::get_skills::GetSkillsError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skill.get_list.execute().await {
        Ok(views) => ApiResponse::success(views),

        Err(GetSkillsError::RepositoryError(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
