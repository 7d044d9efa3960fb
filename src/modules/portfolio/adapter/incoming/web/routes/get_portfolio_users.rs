use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::use_cases::get_portfolio_users::GetPortfolioUsersError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/portfolio-users")]
pub async fn get_portfolio_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_list.execute().await {
        Ok(views) => ApiResponse::success(views),

        Err(GetPortfolioUsersError::RepositoryError(msg)) => {
            error!("Failed to list portfolio users: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
