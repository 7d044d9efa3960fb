pub mod account_query;
pub mod account_repository;
pub mod password_hasher;
pub mod profile_link_repository;
pub mod token_provider;

pub use account_query::{AccountQuery, AccountQueryError, AccountRecord};
pub use account_repository::{AccountRepository, AccountRepositoryError};
pub use password_hasher::{HashError, PasswordHasher};
pub use profile_link_repository::{
    ProfileLinkRepository, ProfileLinkRepositoryError, ProfileLinkState,
};
pub use token_provider::{TokenClaims, TokenError, TokenProvider, TokenSubject};
