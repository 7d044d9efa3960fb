use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminAccount;
use crate::modules::skill::application::ports::outgoing::UpdateSkillData;
use crate::modules::skill::application::use_cases::update_skill::UpdateSkillError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct UpdateSkillRequest {
    pub name: String,
    pub level: String,
}

#[put("/api/skills/{id}")]
pub async fn update_skill_handler(
    _admin: AdminAccount,
    path: web::Path<Uuid>,
    body: web::Json<UpdateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .skill
        .update
        .execute(
            path.into_inner(),
            UpdateSkillData {
                name: request.name,
                level: request.level,
            },
        )
        .await
    {
        Ok(record) => ApiResponse::success(serde_json::json!({
            "id": record.id,
            "name": record.name,
            "level": record.level,
        })),

        Err(UpdateSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(UpdateSkillError::ConcurrencyConflict) => ApiResponse::conflict(
            "SKILL_MODIFIED",
            "The skill was modified by another user. Please refresh and try again",
        ),

        Err(UpdateSkillError::EmptyName) => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }

        Err(UpdateSkillError::RepositoryError(msg)) => {
            error!("Failed to update skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
