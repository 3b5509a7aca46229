//! Transaction response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TransactionRecord;

/// Purchase transaction as returned by detail and active-listing
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i32,
    pub card_number: String,
    /// Amount in the smallest currency unit.
    #[schema(example = 75000)]
    pub amount: i64,
    #[schema(example = "qris")]
    pub payment_method: String,
    pub merchant_id: i32,
    pub transaction_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TransactionRecord> for TransactionResponse {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            amount: record.amount,
            payment_method: record.payment_method.to_string(),
            merchant_id: record.merchant_id,
            transaction_time: record.transaction_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Purchase transaction as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponseDeleteAt {
    pub id: i32,
    pub card_number: String,
    pub amount: i64,
    pub payment_method: String,
    pub merchant_id: i32,
    pub transaction_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&TransactionRecord> for TransactionResponseDeleteAt {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            amount: record.amount,
            payment_method: record.payment_method.to_string(),
            merchant_id: record.merchant_id,
            transaction_time: record.transaction_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
