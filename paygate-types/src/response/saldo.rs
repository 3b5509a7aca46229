//! Saldo response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::SaldoRecord;

/// Balance as returned by detail and active-listing endpoints.
///
/// The last-withdrawal pair is absent until a withdrawal has touched
/// the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaldoResponse {
    pub id: i32,
    pub card_number: String,
    /// Balance in the smallest currency unit.
    #[schema(example = 250000)]
    pub total_balance: i64,
    pub withdraw_amount: Option<i64>,
    pub withdraw_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&SaldoRecord> for SaldoResponse {
    fn from(record: &SaldoRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            total_balance: record.total_balance,
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.map(|dt| dt.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Balance as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaldoResponseDeleteAt {
    pub id: i32,
    pub card_number: String,
    pub total_balance: i64,
    pub withdraw_amount: Option<i64>,
    pub withdraw_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&SaldoRecord> for SaldoResponseDeleteAt {
    fn from(record: &SaldoRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            total_balance: record.total_balance,
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.map(|dt| dt.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_absent_withdrawal_stays_absent() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let record = SaldoRecord {
            id: 1,
            card_number: "4111111111111111".to_string(),
            total_balance: 250_000,
            withdraw_amount: None,
            withdraw_time: None,
            created_at: ts,
            updated_at: ts,
            deleted_at: None,
        };
        let resp = SaldoResponse::from(&record);
        assert_eq!(resp.total_balance, 250_000);
        assert!(resp.withdraw_amount.is_none());
        assert!(resp.withdraw_time.is_none());
    }

    #[test]
    fn test_present_withdrawal_is_rendered() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let record = SaldoRecord {
            id: 1,
            card_number: "4111111111111111".to_string(),
            total_balance: 200_000,
            withdraw_amount: Some(50_000),
            withdraw_time: Some(Utc.with_ymd_and_hms(2024, 6, 2, 14, 30, 0).unwrap()),
            created_at: ts,
            updated_at: ts,
            deleted_at: None,
        };
        let resp = SaldoResponse::from(&record);
        assert_eq!(resp.withdraw_amount, Some(50_000));
        assert_eq!(
            resp.withdraw_time.as_deref(),
            Some("2024-06-02T14:30:00+00:00")
        );
    }
}
