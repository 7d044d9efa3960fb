use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::portfolio::application::use_cases::delete_portfolio_user::DeletePortfolioUserError;
use crate::{shared::api::ApiResponse, AppState};

#[delete("/api/portfolio-users/{id}")]
pub async fn delete_portfolio_user_handler(
    _account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.delete.execute(path.into_inner()).await {
        Ok(_) => ApiResponse::no_content(),

        Err(DeletePortfolioUserError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(DeletePortfolioUserError::RepositoryError(msg)) => {
            error!("Failed to delete portfolio user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
