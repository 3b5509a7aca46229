//! GraphQL rendering for classified errors.
//!
//! Extensions carry the same (code, status) pair the REST body does.
//! The orphan rule keeps `async_graphql::ErrorExtensions` out of reach
//! for enums defined in `paygate-types`, so the rendering hangs off a
//! local trait blanket-implemented over the classification seam.

use async_graphql::{Error, ErrorExtensions};

use paygate_types::ErrorClass;

/// Renders classified gateway errors as GraphQL field errors.
pub trait ClassifiedErrorExt {
    /// Field error with `code` and `status` extensions attached.
    fn to_field_error(&self) -> Error;
}

impl<E: ErrorClass> ClassifiedErrorExt for E {
    fn to_field_error(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.error_code());
            e.set("status", i32::from(self.status_code()));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paygate_types::{AuthError, RepositoryError, TopupError, UserError};

    #[test]
    fn test_message_matches_classification() {
        let err = UserError::NotFound.to_field_error();
        assert_eq!(err.message, "user not found");
        assert!(err.extensions.is_some());
    }

    #[test]
    fn test_auth_conditions_render() {
        let err = AuthError::AccessTokenExpired.to_field_error();
        assert_eq!(err.message, "access token has expired");
    }

    #[test]
    fn test_repository_failures_render_through_service_enum() {
        let err = TopupError::from(RepositoryError::ConnectionFailed("pool exhausted".into()))
            .to_field_error();
        assert_eq!(err.message, "database connection failed: pool exhausted");
    }
}
