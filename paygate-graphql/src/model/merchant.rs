//! Merchant output models (owner-facing, api key included).

use async_graphql::{ID, SimpleObject};

use paygate_types::MerchantRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Merchant as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Merchant {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub api_key: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&MerchantRecord> for Merchant {
    fn from(record: &MerchantRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            user_id: ID(record.user_id.to_string()),
            name: record.name.clone(),
            api_key: record.api_key.clone(),
            status: record.status.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed merchant, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedMerchant {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub api_key: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&MerchantRecord> for TrashedMerchant {
    fn from(record: &MerchantRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            user_id: ID(record.user_id.to_string()),
            name: record.name.clone(),
            api_key: record.api_key.clone(),
            status: record.status.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active merchants.
#[derive(Debug, Clone, SimpleObject)]
pub struct MerchantPage {
    pub data: Vec<Merchant>,
    pub pagination: PageInfo,
}

impl MerchantPage {
    pub fn new(records: &[MerchantRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed merchants.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedMerchantPage {
    pub data: Vec<TrashedMerchant>,
    pub pagination: PageInfo,
}

impl TrashedMerchantPage {
    pub fn new(records: &[MerchantRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
