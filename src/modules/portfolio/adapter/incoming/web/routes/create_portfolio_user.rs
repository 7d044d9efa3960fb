use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::portfolio::application::ports::outgoing::CreatePortfolioUserData;
use crate::modules::portfolio::application::use_cases::create_portfolio_user::CreatePortfolioUserError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct CreatePortfolioUserRequest {
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image_url: String,
}

#[post("/api/portfolio-users")]
pub async fn create_portfolio_user_handler(
    _account: AuthenticatedAccount,
    body: web::Json<CreatePortfolioUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .portfolio
        .create
        .execute(CreatePortfolioUserData {
            name: request.name,
            bio: request.bio,
            profile_image_url: request.profile_image_url,
        })
        .await
    {
        Ok(record) => ApiResponse::created(serde_json::json!({
            "id": record.id,
            "name": record.name,
            "bio": record.bio,
            "profile_image_url": record.profile_image_url,
        })),

        Err(CreatePortfolioUserError::EmptyName) => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }

        Err(CreatePortfolioUserError::RepositoryError(msg)) => {
            error!("Failed to create portfolio user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
