use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::application::use_cases::register_account::{
    RegisterAccountError, RegisterAccountRequest,
};
use crate::{shared::api::ApiResponse, AppState};

#[post("/api/accounts/register")]
pub async fn register_account_handler(
    body: web::Json<RegisterAccountRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.account.register.execute(body.into_inner()).await {
        Ok(account) => ApiResponse::created(account),

        Err(RegisterAccountError::EmailAlreadyRegistered) => ApiResponse::bad_request(
            "EMAIL_ALREADY_REGISTERED",
            "An account with this email already exists",
        ),

        Err(RegisterAccountError::HashingFailed(msg)) => {
            error!("Password hashing failed during registration: {}", msg);
            ApiResponse::internal_error()
        }

        Err(RegisterAccountError::RepositoryError(msg)) => {
            error!("Failed to register account: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
