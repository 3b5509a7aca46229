//! HTTP rendering for success envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use paygate_types::response::{ApiResponse, ApiResponsePagination};

/// 200 rendering of a single-item envelope (orphan rule workaround).
pub struct ApiOk<T>(pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for ApiOk<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// 201 rendering of a single-item envelope, for create endpoints.
pub struct ApiCreated<T>(pub ApiResponse<T>);

impl<T: Serialize> IntoResponse for ApiCreated<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// 200 rendering of a paginated list envelope.
pub struct ApiPage<T>(pub ApiResponsePagination<T>);

impl<T: Serialize> IntoResponse for ApiPage<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_uses_201() {
        let resp = ApiCreated(ApiResponse::success("created role", "admin")).into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_ok_uses_200() {
        let resp = ApiOk(ApiResponse::success("fetched role", "admin")).into_response();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
