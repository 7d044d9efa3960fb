use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::project::application::use_cases::delete_project::DeleteProjectError;
use crate::{shared::api::ApiResponse, AppState};

#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.delete.execute(path.into_inner()).await {
        Ok(_) => ApiResponse::no_content(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!("Failed to delete project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
