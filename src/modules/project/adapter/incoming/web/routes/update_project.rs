use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::project::application::ports::outgoing::UpdateProjectData;
use crate::modules::project::application::use_cases::update_project::UpdateProjectError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    _account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .project
        .update
        .execute(
            path.into_inner(),
            UpdateProjectData {
                title: request.title,
                description: request.description,
                image_url: request.image_url,
            },
        )
        .await
    {
        Ok(record) => ApiResponse::success(serde_json::json!({
            "id": record.id,
            "title": record.title,
            "description": record.description,
            "image_url": record.image_url,
        })),

        Err(UpdateProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(UpdateProjectError::EmptyTitle) => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }

        Err(UpdateProjectError::RepositoryError(msg)) => {
            error!("Failed to update project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
