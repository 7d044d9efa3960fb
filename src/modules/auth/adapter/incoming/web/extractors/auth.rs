use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::shared::api::ApiResponse;

/// Represents an authenticated account, resolved purely from its claims
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account_id: Uuid,
    pub email: String,
    pub role: String,
    pub portfolio_user_id: Option<Uuid>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AuthenticatedAccount {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider =
            match req.app_data::<actix_web::web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
                Some(provider) => provider,
                None => {
                    return ready(Err(create_api_error(ApiResponse::internal_error())));
                }
            };

        // Extract token from Authorization header
        let token = match extract_token_from_header(req) {
            Some(t) => t,
            None => {
                return ready(Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))));
            }
        };

        // Verify token
        match token_provider.verify_token(&token) {
            Ok(claims) => {
                if claims.token_type != "access" {
                    return ready(Err(create_api_error(ApiResponse::unauthorized(
                        "INVALID_TOKEN_TYPE",
                        "Invalid token type",
                    ))));
                }

                ready(Ok(AuthenticatedAccount {
                    account_id: claims.sub,
                    email: claims.email,
                    role: claims.role,
                    portfolio_user_id: claims.portfolio_user_id,
                }))
            }
            Err(_) => ready(Err(create_api_error(ApiResponse::unauthorized(
                "INVALID_TOKEN",
                "Invalid or expired token",
            )))),
        }
    }
}

/// An authenticated account holding the Admin role
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub account_id: Uuid,
}

impl FromRequest for AdminAccount {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let account_future = AuthenticatedAccount::from_request(req, payload);

        match account_future.into_inner() {
            Ok(account) => {
                if account.role != "Admin" {
                    return ready(Err(create_api_error(ApiResponse::forbidden(
                        "ADMIN_ONLY",
                        "Administrator role required",
                    ))));
                }

                ready(Ok(AdminAccount {
                    account_id: account.account_id,
                }))
            }
            Err(e) => ready(Err(e)),
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}
