use actix_web::{post, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::link_portfolio_user::LinkPortfolioUserError;
use crate::{shared::api::ApiResponse, AppState};

#[post("/api/accounts/link/{portfolio_user_id}")]
pub async fn link_portfolio_user_handler(
    account: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let portfolio_user_id = path.into_inner();

    match data
        .account
        .link_portfolio_user
        .execute(account.account_id, portfolio_user_id)
        .await
    {
        Ok(output) => ApiResponse::success(output),

        Err(LinkPortfolioUserError::ProfileNotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(LinkPortfolioUserError::AccountNotResolved) => ApiResponse::unauthorized(
            "ACCOUNT_NOT_RESOLVED",
            "The authenticated account could not be resolved",
        ),

        Err(LinkPortfolioUserError::AccountAlreadyLinked) => ApiResponse::bad_request(
            "ACCOUNT_ALREADY_LINKED",
            "This account is already linked to a different portfolio user",
        ),

        Err(LinkPortfolioUserError::ProfileAlreadyClaimed) => ApiResponse::bad_request(
            "PROFILE_ALREADY_CLAIMED",
            "This portfolio user is already claimed by another account",
        ),

        Err(LinkPortfolioUserError::RepositoryError(msg)) => {
            error!("Failed to link portfolio user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
