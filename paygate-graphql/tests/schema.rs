//! Schema execution tests: record in, GraphQL response out.

use async_graphql::{EmptyMutation, EmptySubscription, Object, Result, Schema};
use chrono::{NaiveDate, TimeZone, Utc};

use paygate_graphql::{CardPage, ClassifiedErrorExt, User};
use paygate_types::response::PaginationMeta;
use paygate_types::{CardProvider, CardRecord, CardType, SaldoError, UserError, UserRecord};

fn sample_user() -> UserRecord {
    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();
    UserRecord {
        id: 42,
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        created_at: ts,
        updated_at: ts,
        deleted_at: None,
    }
}

fn sample_card() -> CardRecord {
    let ts = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    CardRecord {
        id: 9,
        user_id: 42,
        card_number: "4111111111111111".to_string(),
        card_type: CardType::Debit,
        expire_date: NaiveDate::from_ymd_opt(2027, 4, 30).unwrap(),
        cvv: "123".to_string(),
        card_provider: CardProvider::Visa,
        created_at: ts,
        updated_at: ts,
        deleted_at: None,
    }
}

struct Query;

#[Object]
impl Query {
    async fn user(&self) -> User {
        User::from(&sample_user())
    }

    async fn missing_user(&self) -> Result<User> {
        Err(UserError::NotFound.to_field_error())
    }

    async fn empty_saldo(&self) -> Result<i64> {
        Err(SaldoError::InsufficientBalance.to_field_error())
    }

    async fn cards(&self) -> CardPage {
        CardPage::new(&[sample_card()], PaginationMeta::new(1, 10, 1))
    }
}

fn schema() -> Schema<Query, EmptyMutation, EmptySubscription> {
    Schema::new(Query, EmptyMutation, EmptySubscription)
}

#[tokio::test]
async fn user_record_maps_into_schema_output() {
    let resp = schema()
        .execute("{ user { id email createdAt } }")
        .await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let json = resp.data.into_json().unwrap();
    assert_eq!(json["user"]["id"], "42");
    assert_eq!(json["user"]["email"], "ada@example.com");
    assert_eq!(json["user"]["createdAt"], "2024-01-15T08:30:00+00:00");
}

#[tokio::test]
async fn card_page_carries_pagination_block() {
    let resp = schema()
        .execute(
            "{ cards { data { cardNumber expireDate cardProvider } \
               pagination { currentPage totalPages } } }",
        )
        .await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

    let json = resp.data.into_json().unwrap();
    assert_eq!(json["cards"]["data"][0]["cardNumber"], "4111111111111111");
    assert_eq!(json["cards"]["data"][0]["expireDate"], "2027-04-30");
    assert_eq!(json["cards"]["pagination"]["currentPage"], 1);
    assert_eq!(json["cards"]["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn classified_error_surfaces_code_and_status() {
    let resp = schema().execute("{ missingUser { id } }").await;
    assert_eq!(resp.errors.len(), 1);

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["errors"][0]["message"], "user not found");
    assert_eq!(json["errors"][0]["extensions"]["code"], "USER_NOT_FOUND");
    assert_eq!(json["errors"][0]["extensions"]["status"], 404);
}

#[tokio::test]
async fn validation_error_surfaces_as_400() {
    let resp = schema().execute("{ emptySaldo }").await;
    assert_eq!(resp.errors.len(), 1);

    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(
        json["errors"][0]["extensions"]["code"],
        "SALDO_INSUFFICIENT_BALANCE"
    );
    assert_eq!(json["errors"][0]["extensions"]["status"], 400);
}

#[tokio::test]
async fn schema_never_exposes_cvv() {
    let sdl = schema().sdl();
    assert!(sdl.contains("type Card"));
    assert!(!sdl.to_lowercase().contains("cvv"));
}
