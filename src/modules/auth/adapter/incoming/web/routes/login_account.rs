use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::application::use_cases::login_account::{LoginError, LoginRequest};
use crate::{shared::api::ApiResponse, AppState};

#[post("/api/accounts/login")]
pub async fn login_account_handler(
    body: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.login.execute(body.into_inner()).await {
        Ok(response) => ApiResponse::success(response),

        Err(LoginError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }

        Err(LoginError::PasswordVerificationFailed(msg)) => {
            error!("Password verification failed: {}", msg);
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenGenerationFailed(msg)) => {
            error!("Token generation failed during login: {}", msg);
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(msg)) => {
            error!("Account lookup failed during login: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
