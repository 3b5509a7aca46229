//! End-to-end rendering tests: envelope in, HTTP body out.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;

use paygate_rest::{ApiError, ApiOk, ApiPage};
use paygate_types::response::{
    ApiResponse, ApiResponsePagination, PaginationMeta, UserResponse, map_collection,
};
use paygate_types::{TransferError, UserError, UserRecord};

fn sample_users() -> Vec<UserRecord> {
    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
    vec![
        UserRecord {
            id: 1,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            created_at: ts,
            updated_at: ts,
            deleted_at: None,
        },
        UserRecord {
            id: 2,
            firstname: "Alan".to_string(),
            lastname: "Turing".to_string(),
            email: "alan@example.com".to_string(),
            created_at: ts,
            updated_at: ts,
            deleted_at: None,
        },
    ]
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn success_envelope_renders_mapped_data() {
    let users = sample_users();
    let resp = ApiOk(ApiResponse::success(
        "fetched user",
        UserResponse::from(&users[0]),
    ))
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["id"], 1);
    assert_eq!(json["data"]["email"], "ada@example.com");
    assert_eq!(json["data"]["created_at"], "2024-01-15T08:30:00+00:00");
}

#[tokio::test]
async fn paginated_envelope_renders_meta() {
    let users = sample_users();
    let data: Vec<UserResponse> = map_collection(&users);
    let resp = ApiPage(ApiResponsePagination::success(
        "fetched users",
        data,
        PaginationMeta::new(1, 10, 2),
    ))
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["current_page"], 1);
    assert_eq!(json["pagination"]["page_size"], 10);
    assert_eq!(json["pagination"]["total_records"], 2);
    assert_eq!(json["pagination"]["total_pages"], 1);
}

#[tokio::test]
async fn not_found_classification_renders_404_body() {
    let resp = ApiError::from(UserError::NotFound).into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json = body_json(resp).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "user not found");
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn validation_classification_renders_400_body() {
    let resp = ApiError::from(TransferError::SameCard).into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(
        json["message"],
        "transfer source and destination are the same card"
    );
    assert_eq!(json["code"], 400);
}
