use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::modules::portfolio::application::use_cases::get_user_relations::GetUserRelationsError;
use crate::{shared::api::ApiResponse, AppState};

#[get("/api/portfolio-users/{id}/skills")]
pub async fn get_user_skills_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .portfolio
        .get_user_skills
        .execute(path.into_inner())
        .await
    {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetUserRelationsError::UserNotFound) => {
            ApiResponse::not_found("PORTFOLIO_USER_NOT_FOUND", "Portfolio user not found")
        }

        Err(GetUserRelationsError::RepositoryError(msg)) => {
            error!("Failed to fetch user skills: {}", msg);
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
    use crate::tests::support::portfolio_test_fixtures::{aggregated_view, FixedGetUserSkills};

    #[actix_web::test]
    async fn test_get_user_skills_success() {
        let view = aggregated_view();
        let skills = view.skills.clone();

        let app_state = TestAppStateBuilder::default()
            .with_get_user_skills(FixedGetUserSkills::with_skills(skills.clone()))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_user_skills_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio-users/{}/skills", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), skills.len());
    }

    #[actix_web::test]
    async fn test_get_user_skills_unknown_user() {
        let app_state = TestAppStateBuilder::default()
            .with_get_user_skills(FixedGetUserSkills::not_found())
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_user_skills_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/portfolio-users/{}/skills", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
