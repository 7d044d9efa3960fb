use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminAccount;
use crate::modules::skill::application::ports::outgoing::CreateSkillData;
use crate::modules::skill::application::use_cases::create_skill::CreateSkillError;
use crate::{shared::api::ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub struct CreateSkillRequest {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "Beginner".to_string()
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _admin: AdminAccount,
    body: web::Json<CreateSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = body.into_inner();

    match data
        .skill
        .create
        .execute(CreateSkillData {
            name: request.name,
            level: request.level,
        })
        .await
    {
        Ok(record) => ApiResponse::created(serde_json::json!({
            "id": record.id,
            "name": record.name,
            "level": record.level,
        })),

        Err(CreateSkillError::EmptyName) => {
            ApiResponse::bad_request("EMPTY_NAME", "Name cannot be empty")
        }

        Err(CreateSkillError::RepositoryError(msg)) => {
            error!("Failed to create skill: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::skill::application::ports::outgoing::SkillRecord;
    use crate::modules::skill::application::use_cases::create_skill::CreateSkillUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::test_helpers::{
        access_token, create_test_token_service,
    };

    #[derive(Clone)]
    struct MockCreateSkillUseCase {
        result: Result<SkillRecord, CreateSkillError>,
    }

    #[async_trait]
    impl CreateSkillUseCase for MockCreateSkillUseCase {
        async fn execute(&self, _data: CreateSkillData) -> Result<SkillRecord, CreateSkillError> {
            self.result.clone()
        }
    }

    async fn call(role: &str) -> StatusCode {
        let app_state = TestAppStateBuilder::default()
            .with_create_skill(MockCreateSkillUseCase {
                result: Ok(SkillRecord {
                    id: Uuid::new_v4(),
                    name: "Go".to_string(),
                    level: "Beginner".to_string(),
                }),
            })
            .build();

        let token_provider: Arc<dyn TokenProvider + Send + Sync> =
            Arc::new(create_test_token_service());

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(actix_web::web::Data::new(token_provider))
                .service(create_skill_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .set_json(json!({ "name": "Go" }))
            .insert_header((
                "Authorization",
                format!("Bearer {}", access_token(Uuid::new_v4(), role)),
            ))
            .to_request();

        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_create_skill_as_admin_created() {
        assert_eq!(call("Admin").await, StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_create_skill_as_user_forbidden() {
        assert_eq!(call("User").await, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_create_skill_applies_default_level() {
        let parsed: CreateSkillRequest =
            serde_json::from_value(json!({ "name": "Go" })).unwrap();

        assert_eq!(parsed.level, "Beginner");
    }
}
