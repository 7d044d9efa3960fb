use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use tracing;

use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TokenSubject,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    /// Initialize the service with config
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtTokenService {
    /// Generate an access token carrying the account's claim set
    fn generate_access_token(&self, subject: TokenSubject) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.config.access_token_expiry);

        let claims = TokenClaims {
            sub: subject.account_id,
            email: subject.email,
            role: subject.role,
            portfolio_user_id: subject.portfolio_user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            token_type: "access".to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    /// Verify and decode a token
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Unknown error");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
            issuer: "PortfolioApi".to_string(),
            access_token_expiry: 3600,
        }
    }

    fn subject(portfolio_user_id: Option<Uuid>) -> TokenSubject {
        TokenSubject {
            account_id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            role: "User".to_string(),
            portfolio_user_id,
        }
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = JwtTokenService::new(test_config());
        let subject = subject(None);
        let account_id = subject.account_id;

        let token = service
            .generate_access_token(subject)
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.sub, account_id);
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.role, "User");
        assert_eq!(claims.portfolio_user_id, None);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_portfolio_claim_round_trips() {
        let service = JwtTokenService::new(test_config());
        let profile_id = Uuid::new_v4();

        let token = service
            .generate_access_token(subject(Some(profile_id)))
            .expect("Token should be generated");

        let claims = service.verify_token(&token).expect("Token should be valid");
        assert_eq!(claims.portfolio_user_id, Some(profile_id));
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = JwtTokenService::new(test_config());

        let claims = service.verify_token("invalid.jwt.token");
        assert!(claims.is_err(), "Invalid token should fail verification");
    }

    #[test]
    fn test_token_signed_with_other_key_is_rejected() {
        let service = JwtTokenService::new(test_config());
        let other = JwtTokenService::new(JwtConfig {
            secret_key: "a_completely_different_secret_key".to_string(),
            ..test_config()
        });

        let token = other
            .generate_access_token(subject(None))
            .expect("Token should be generated");

        assert!(service.verify_token(&token).is_err());
    }
}
