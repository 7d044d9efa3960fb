use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::portfolio::application::use_cases::get_portfolio_user::GetPortfolioUserError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/portfolio-users/{id}")]
pub async fn get_portfolio_user_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.get_single.execute(path.into_inner()).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetPortfolioUserError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(GetPortfolioUserError::RepositoryError(msg)) => {
            error!("Failed to fetch portfolio user: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::portfolio_test_fixtures::{aggregated_view, FixedGetPortfolioUser};

    #[actix_web::test]
    async fn test_get_portfolio_user_success() {
        let view = aggregated_view();
        let id = view.id;

        let app_state = TestAppStateBuilder::default()
            .with_get_portfolio_user(FixedGetPortfolioUser::found(view))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_portfolio_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio-users/{}", id))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], id.to_string());
        assert!(body["data"]["projects"].is_array());
        assert!(body["data"]["skills"].is_array());
    }

    #[actix_web::test]
    async fn test_get_portfolio_user_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_portfolio_user(FixedGetPortfolioUser::not_found())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_portfolio_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio-users/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PORTFOLIO_USER_NOT_FOUND");
    }
}
