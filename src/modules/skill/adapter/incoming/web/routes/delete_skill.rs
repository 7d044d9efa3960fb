use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminAccount;
use crate::modules::skill::application::use_cases::delete_skill::DeleteSkillError;
use crate::{shared::api::ApiResponse, AppState};

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _admin: AdminAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.skill.delete.execute(path.into_inner()).await {
        Ok(_) => ApiResponse::no_content(),

        Err(DeleteSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(DeleteSkillError::RepositoryError(msg)) => {
            error!("Failed to delete skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
