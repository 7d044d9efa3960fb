use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedAccount;
use crate::modules::project::application::ports::outgoing::CreateProjectData;
use crate::modules::project::application::use_cases::create_project::CreateProjectError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[post("/api/projects")]
pub async fn create_project_handler(
    _account: AuthenticatedAccount,
    body: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .project
        .create
        .execute(CreateProjectData {
            title: request.title,
            description: request.description,
            image_url: request.image_url,
        })
        .await
    {
        Ok(record) => ApiResponse::created(serde_json::json!({
            "id": record.id,
            "title": record.title,
            "description": record.description,
            "image_url": record.image_url,
        })),

        Err(CreateProjectError::EmptyTitle) => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }

        Err(CreateProjectError::RepositoryError(msg)) => {
            error!("Failed to create project: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::project::application::ports::outgoing::ProjectRecord;
    use crate::modules::project::application::use_cases::create_project::CreateProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        access_token, create_test_token_service,
    };

    #[derive(Clone)]
    struct MockCreateProjectUseCase {
        result: Result<ProjectRecord, CreateProjectError>,
    }

    #[async_trait]
    impl CreateProjectUseCase for MockCreateProjectUseCase {
        async fn execute(
            &self,
            _data: CreateProjectData,
        ) -> Result<ProjectRecord, CreateProjectError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_create_project_created() {
        let record = ProjectRecord {
            id: Uuid::new_v4(),
            title: "Portfolio site".to_string(),
            description: "Static site".to_string(),
            image_url: "https://example.com/p.png".to_string(),
        };

        let app_state = TestAppStateBuilder::default()
            .with_create_project(MockCreateProjectUseCase {
                result: Ok(record.clone()),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_token_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(create_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(json!({ "title": "Portfolio site" }))
            .insert_header((
                "Authorization",
                format!("Bearer {}", access_token(Uuid::new_v4(), "User")),
            ))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], record.id.to_string());
    }
}
