//! Transfer response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TransferRecord;

/// Card-to-card transfer as returned by detail and active-listing
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferResponse {
    pub id: i32,
    pub transfer_from: String,
    pub transfer_to: String,
    /// Amount in the smallest currency unit.
    #[schema(example = 50000)]
    pub transfer_amount: i64,
    pub transfer_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TransferRecord> for TransferResponse {
    fn from(record: &TransferRecord) -> Self {
        Self {
            id: record.id,
            transfer_from: record.transfer_from.clone(),
            transfer_to: record.transfer_to.clone(),
            transfer_amount: record.transfer_amount,
            transfer_time: record.transfer_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Card-to-card transfer as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferResponseDeleteAt {
    pub id: i32,
    pub transfer_from: String,
    pub transfer_to: String,
    pub transfer_amount: i64,
    pub transfer_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&TransferRecord> for TransferResponseDeleteAt {
    fn from(record: &TransferRecord) -> Self {
        Self {
            id: record.id,
            transfer_from: record.transfer_from.clone(),
            transfer_to: record.transfer_to.clone(),
            transfer_amount: record.transfer_amount,
            transfer_time: record.transfer_time.to_rfc3339(),
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
    fn test_card_numbers_copied_verbatim() {
        let ts = Utc.with_ymd_and_hms(2024, 7, 4, 16, 45, 0).unwrap();
        let record = TransferRecord {
            id: 11,
            transfer_from: "4111111111111111".to_string(),
            transfer_to: "5500005555555559".to_string(),
            transfer_amount: 50_000,
            transfer_time: ts,
            created_at: ts,
            updated_at: ts,
            deleted_at: None,
        };
        let resp = TransferResponse::from(&record);
        assert_eq!(resp.transfer_from, record.transfer_from);
        assert_eq!(resp.transfer_to, record.transfer_to);
        assert_eq!(resp.transfer_time, "2024-07-04T16:45:00+00:00");
    }
}
