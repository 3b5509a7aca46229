//! Withdraw response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::WithdrawRecord;

/// Withdrawal as returned by detail and active-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WithdrawResponse {
    pub id: i32,
    pub card_number: String,
    /// Amount in the smallest currency unit.
    #[schema(example = 50000)]
    pub withdraw_amount: i64,
    pub withdraw_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&WithdrawRecord> for WithdrawResponse {
    fn from(record: &WithdrawRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Withdrawal as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WithdrawResponseDeleteAt {
    pub id: i32,
    pub card_number: String,
    pub withdraw_amount: i64,
    pub withdraw_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&WithdrawRecord> for WithdrawResponseDeleteAt {
    fn from(record: &WithdrawRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
