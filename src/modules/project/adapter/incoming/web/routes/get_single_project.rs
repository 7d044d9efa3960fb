use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::project::application::use_cases::get_single_project::GetSingleProjectError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.get_single.execute(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!("Failed to fetch project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
