#[cfg(test)]
pub mod test_helpers {
    use uuid::Uuid;

    use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
    use crate::modules::auth::application::ports::outgoing::token_provider::{
        TokenProvider, TokenSubject,
    };

    pub fn create_test_token_service() -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            issuer: "PortfolioApi".to_string(),
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            access_token_expiry: 3600,
        })
    }

    pub fn access_token(account_id: Uuid, role: &str) -> String {
        create_test_token_service()
            .generate_access_token(TokenSubject {
                account_id,
                email: "test@example.com".to_string(),
                role: role.to_string(),
                portfolio_user_id: None,
            })
            .unwrap()
    }
}
