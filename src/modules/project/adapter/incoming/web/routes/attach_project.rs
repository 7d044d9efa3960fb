use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::project::application::use_cases::attach_project::AttachProjectError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct AttachProjectRequest {
    pub portfolio_user_id: Uuid,
    pub project_id: Uuid,
}

#[post("/api/projects/attach")]
pub async fn attach_project_handler(
    _account: AuthenticatedAccount,
    body: web::Json<AttachProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .project
        .attach
        .execute(request.portfolio_user_id, request.project_id)
        .await
    {
        Ok(_) => ApiResponse::message("Project attached"),

        Err(AttachProjectError::PortfolioUserNotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(AttachProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(AttachProjectError::AlreadyAttached) => ApiResponse::conflict(
            "ALREADY_ATTACHED",
            "This project is already attached to the portfolio user",
        ),

        Err(AttachProjectError::RepositoryError(msg)) => {
            error!("Failed to attach project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
