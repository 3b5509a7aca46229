//! Merchant response DTOs and record mappers.
//!
//! These are owner-facing shapes, so the merchant's own `api_key` is
//! included.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::MerchantRecord;

/// Merchant as returned by detail and active-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MerchantResponse {
    pub id: i32,
    pub user_id: i32,
    #[schema(example = "Kopi Kenangan")]
    pub name: String,
    pub api_key: String,
    #[schema(example = "active")]
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&MerchantRecord> for MerchantResponse {
    fn from(record: &MerchantRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name.clone(),
            api_key: record.api_key.clone(),
            status: record.status.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Merchant as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MerchantResponseDeleteAt {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub api_key: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&MerchantRecord> for MerchantResponseDeleteAt {
    fn from(record: &MerchantRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name.clone(),
            api_key: record.api_key.clone(),
            status: record.status.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
