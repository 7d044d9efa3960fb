use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::use_cases::get_projects::GetProjectsError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(views) => ApiResponse::success(views),

        Err(GetProjectsError::RepositoryError(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
