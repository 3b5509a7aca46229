//! Wire envelopes shared by every REST endpoint.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::pagination::PaginationMeta;

/// Envelope for a successful single-item response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `"success"`.
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Builds a success envelope around `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }
}

/// Envelope for a successful list response with pagination meta attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponsePagination<T> {
    /// Always `"success"`.
    #[schema(example = "success")]
    pub status: String,
    pub message: String,
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> ApiResponsePagination<T> {
    /// Builds a success envelope around a mapped page of `data`.
    pub fn success(message: impl Into<String>, data: Vec<T>, pagination: PaginationMeta) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
            pagination,
        }
    }
}

/// Envelope rendered for every failed request, REST-side.
///
/// `code` mirrors the HTTP status into the body so clients behind
/// status-rewriting proxies still see the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `"error"`.
    #[schema(example = "error")]
    pub status: String,
    pub message: String,
    #[schema(example = 404)]
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let resp = ApiResponse::success("fetched user", 7_i32);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "fetched user");
        assert_eq!(json["data"], 7);
    }

    #[test]
    fn test_pagination_envelope_shape() {
        let resp = ApiResponsePagination::success(
            "fetched users",
            vec!["a", "b"],
            PaginationMeta::new(1, 10, 2),
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["pagination"]["current_page"], 1);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_error_envelope_shape() {
        let resp = ErrorResponse::new("user not found", 404);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], 404);
    }
}
