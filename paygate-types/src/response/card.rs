//! Card response DTOs and record mappers.
//!
//! The CVV never leaves the domain layer: neither DTO has a field for
//! it, so a mapper cannot leak it by construction.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CardRecord;

/// Card as returned by detail and active-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    pub id: i32,
    pub user_id: i32,
    #[schema(example = "4111111111111111")]
    pub card_number: String,
    #[schema(example = "debit")]
    pub card_type: String,
    /// Expiry rendered as `YYYY-MM-DD`.
    #[schema(example = "2027-04-30")]
    pub expire_date: String,
    #[schema(example = "visa")]
    pub card_provider: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&CardRecord> for CardResponse {
    fn from(record: &CardRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            card_number: record.card_number.clone(),
            card_type: record.card_type.to_string(),
            expire_date: record.expire_date.format("%Y-%m-%d").to_string(),
            card_provider: record.card_provider.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Card as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardResponseDeleteAt {
    pub id: i32,
    pub user_id: i32,
    pub card_number: String,
    pub card_type: String,
    pub expire_date: String,
    pub card_provider: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&CardRecord> for CardResponseDeleteAt {
    fn from(record: &CardRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            card_number: record.card_number.clone(),
            card_type: record.card_type.to_string(),
            expire_date: record.expire_date.format("%Y-%m-%d").to_string(),
            card_provider: record.card_provider.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CardProvider, CardType};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn sample_record() -> CardRecord {
        CardRecord {
            id: 9,
            user_id: 3,
            card_number: "4111111111111111".to_string(),
            card_type: CardType::Debit,
            expire_date: NaiveDate::from_ymd_opt(2027, 4, 30).unwrap(),
            cvv: "123".to_string(),
            card_provider: CardProvider::Visa,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_expire_date_rendering() {
        let resp = CardResponse::from(&sample_record());
        assert_eq!(resp.expire_date, "2027-04-30");
        assert_eq!(resp.card_type, "debit");
        assert_eq!(resp.card_provider, "visa");
    }

    #[test]
    fn test_cvv_never_serialized() {
        let resp = CardResponse::from(&sample_record());
        let json = serde_json::to_string(&resp).unwrap();
        assert!(!json.contains("cvv"));
        assert!(!json.contains("123\""));

        let trashed = CardResponseDeleteAt::from(&sample_record());
        let json = serde_json::to_string(&trashed).unwrap();
        assert!(!json.contains("cvv"));
    }
}
