//! HTTP rendering for classified errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use paygate_types::ErrorClass;
use paygate_types::response::ErrorResponse;

/// Wrapper giving classified errors an HTTP rendering
/// (orphan rule workaround).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(ErrorResponse);

impl ApiError {
    /// Wraps an already-built error envelope.
    pub fn new(response: ErrorResponse) -> Self {
        ApiError(response)
    }

    /// The envelope that will be rendered.
    pub fn response(&self) -> &ErrorResponse {
        &self.0
    }
}

impl<E: ErrorClass> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.to_error_response())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // A code outside the valid status range renders as 500 rather
        // than panicking the response path.
        let status =
            StatusCode::from_u16(self.0.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = self.0.code, message = %self.0.message, "request failed");
        }

        (status, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paygate_types::{MerchantError, RepositoryError, SaldoError, UserError};

    #[test]
    fn test_classified_error_keeps_its_status() {
        let err = ApiError::from(UserError::NotFound);
        assert_eq!(err.response().code, 404);
        assert_eq!(err.response().message, "user not found");
    }

    #[test]
    fn test_auth_classification_is_401() {
        let err = ApiError::from(MerchantError::ApiKeyInvalid);
        assert_eq!(err.response().code, 401);
    }

    #[test]
    fn test_repository_failure_lowered_through_service_enum() {
        let err = ApiError::from(SaldoError::from(RepositoryError::ConnectionFailed(
            "pool exhausted".to_string(),
        )));
        assert_eq!(err.response().code, 503);
    }

    #[test]
    fn test_out_of_range_code_falls_back_to_500() {
        let err = ApiError::new(ErrorResponse::new("broken classification", 42));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
