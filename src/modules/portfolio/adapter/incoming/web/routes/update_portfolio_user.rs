use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::portfolio::application::ports::outgoing::UpdatePortfolioUserData;
use crate::modules::portfolio::application::use_cases::update_portfolio_user::UpdatePortfolioUserError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct UpdatePortfolioUserRequest {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image_url: String,
}

#[put("/api/portfolio-users/{id}")]
pub async fn update_portfolio_user_handler(
    _account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePortfolioUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .portfolio
        .update
        .execute(
            path.into_inner(),
            UpdatePortfolioUserData {
                name: request.name,
                bio: request.bio,
                profile_image_url: request.profile_image_url,
            },
        )
        .await
    {
        Ok(record) => ApiResponse::success(serde_json::json!({
            "id": record.id,
            "name": record.name,
            "bio": record.bio,
            "profile_image_url": record.profile_image_url,
        })),

        Err(UpdatePortfolioUserError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(UpdatePortfolioUserError::EmptyName) => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }

        Err(UpdatePortfolioUserError::RepositoryError(msg)) => {
            error!("Failed to update portfolio user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
