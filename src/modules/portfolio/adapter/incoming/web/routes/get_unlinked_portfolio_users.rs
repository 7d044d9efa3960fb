use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::portfolio::application::use_cases::get_unlinked_portfolio_users::GetUnlinkedPortfolioUsersError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/portfolio-users/unlinked")]
pub async fn get_unlinked_portfolio_users_handler(
    _account: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.get_unlinked.execute().await {
        Ok(summaries) => ApiResponse::success(summaries),

        Err(GetUnlinkedPortfolioUsersError::RepositoryError(msg)) => {
            error!("Failed to list unlinked portfolio users: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::portfolio::application::ports::outgoing::PortfolioUserSummary;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        access_token, create_test_token_service,
    };
    use crate::tests::support::portfolio_test_fixtures::FixedGetUnlinkedPortfolioUsers;

    #[actix_web::test]
    async fn test_get_unlinked_requires_auth() {
        let app_state = TestAppStateBuilder::default().build();
        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_token_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(get_unlinked_portfolio_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio-users/unlinked")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_get_unlinked_success() {
        let summary = PortfolioUserSummary {
            id: Uuid::new_v4(),
            name: "Unclaimed".to_string(),
            bio: "Seeded profile".to_string(),
            profile_image_url: "https://example.com/u.png".to_string(),
        };

        let app_state = TestAppStateBuilder::default()
            .with_get_unlinked_portfolio_users(FixedGetUnlinkedPortfolioUsers::with_summaries(
                vec![summary.clone()],
            ))
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_token_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(get_unlinked_portfolio_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/portfolio-users/unlinked")
            .insert_header((
                "Authorization",
                format!("Bearer {}", access_token(Uuid::new_v4(), "User")),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["id"], summary.id.to_string());
    }
}
