//! Auth and token service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the auth service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("access token has expired")]
    AccessTokenExpired,

    #[error("refresh token has expired")]
    RefreshTokenExpired,

    #[error("token is malformed or not issued by this gateway")]
    TokenInvalid,

    #[error("authentication required")]
    Unauthenticated,

    #[error("not allowed to access this resource")]
    Forbidden,

    #[error("refresh token not found")]
    RefreshTokenNotFound,

    #[error("failed to hash password")]
    HashFailed,

    #[error("failed to issue tokens")]
    TokenGenerationFailed,

    #[error("failed to register user")]
    RegisterFailed,

    #[error("failed to log in")]
    LoginFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for AuthError {
    fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials
            | Self::AccessTokenExpired
            | Self::RefreshTokenExpired
            | Self::TokenInvalid
            | Self::Unauthenticated => 401,
            Self::Forbidden => 403,
            Self::RefreshTokenNotFound => 404,
            Self::HashFailed | Self::TokenGenerationFailed | Self::RegisterFailed
            | Self::LoginFailed => 500,
            Self::Repository(err) => err.status_code(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "AUTH_INVALID_CREDENTIALS",
            Self::AccessTokenExpired => "AUTH_ACCESS_TOKEN_EXPIRED",
            Self::RefreshTokenExpired => "AUTH_REFRESH_TOKEN_EXPIRED",
            Self::TokenInvalid => "AUTH_TOKEN_INVALID",
            Self::Unauthenticated => "AUTH_UNAUTHENTICATED",
            Self::Forbidden => "AUTH_FORBIDDEN",
            Self::RefreshTokenNotFound => "AUTH_REFRESH_TOKEN_NOT_FOUND",
            Self::HashFailed => "AUTH_HASH_FAILED",
            Self::TokenGenerationFailed => "AUTH_TOKEN_GENERATION_FAILED",
            Self::RegisterFailed => "AUTH_REGISTER_FAILED",
            Self::LoginFailed => "AUTH_LOGIN_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Entity;

    #[test]
    fn test_credential_conditions_are_401() {
        assert_eq!(AuthError::InvalidCredentials.status_code(), 401);
        assert_eq!(AuthError::AccessTokenExpired.status_code(), 401);
        assert_eq!(AuthError::TokenInvalid.status_code(), 401);
    }

    #[test]
    fn test_forbidden_is_403() {
        assert_eq!(AuthError::Forbidden.status_code(), 403);
        assert_eq!(AuthError::Forbidden.error_code(), "AUTH_FORBIDDEN");
    }

    #[test]
    fn test_repository_failure_delegates() {
        let err = AuthError::from(RepositoryError::NotFound {
            entity: Entity::Token,
        });
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_string(), "token not found");
        assert_eq!(err.error_code(), "RESOURCE_NOT_FOUND");
    }
}
