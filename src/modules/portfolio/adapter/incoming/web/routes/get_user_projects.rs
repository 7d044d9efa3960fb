use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::portfolio::application::use_cases::get_user_relations::GetUserRelationsError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/portfolio-users/{id}/projects")]
pub async fn get_user_projects_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .get_user_projects
        .execute(path.into_inner())
        .await
    {
        Ok(projects) => ApiResponse::success(projects),

        Err(GetUserRelationsError::UserNotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(GetUserRelationsError::RepositoryError(msg)) => {
            error!("Failed to fetch user projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
