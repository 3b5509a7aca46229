//! Topup response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::TopupRecord;

/// Topup as returned by detail and active-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopupResponse {
    pub id: i32,
    pub card_number: String,
    #[schema(example = "TP-2024-000913")]
    pub topup_no: String,
    /// Amount in the smallest currency unit.
    #[schema(example = 100000)]
    pub topup_amount: i64,
    #[schema(example = "virtual_account")]
    pub topup_method: String,
    pub topup_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TopupRecord> for TopupResponse {
    fn from(record: &TopupRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            topup_no: record.topup_no.clone(),
            topup_amount: record.topup_amount,
            topup_method: record.topup_method.to_string(),
            topup_time: record.topup_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Topup as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TopupResponseDeleteAt {
    pub id: i32,
    pub card_number: String,
    pub topup_no: String,
    pub topup_amount: i64,
    pub topup_method: String,
    pub topup_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&TopupRecord> for TopupResponseDeleteAt {
    fn from(record: &TopupRecord) -> Self {
        Self {
            id: record.id,
            card_number: record.card_number.clone(),
            topup_no: record.topup_no.clone(),
            topup_amount: record.topup_amount,
            topup_method: record.topup_method.to_string(),
            topup_time: record.topup_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
