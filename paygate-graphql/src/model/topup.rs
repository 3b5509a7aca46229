//! Topup output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::TopupRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Topup as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Topup {
    pub id: ID,
    pub card_number: String,
    pub topup_no: String,
    pub topup_amount: i64,
    pub topup_method: String,
    pub topup_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TopupRecord> for Topup {
    fn from(record: &TopupRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
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

/// Trashed topup, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedTopup {
    pub id: ID,
    pub card_number: String,
    pub topup_no: String,
    pub topup_amount: i64,
    pub topup_method: String,
    pub topup_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&TopupRecord> for TrashedTopup {
    fn from(record: &TopupRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
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

/// One page of active topups.
#[derive(Debug, Clone, SimpleObject)]
pub struct TopupPage {
    pub data: Vec<Topup>,
    pub pagination: PageInfo,
}

impl TopupPage {
    pub fn new(records: &[TopupRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed topups.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedTopupPage {
    pub data: Vec<TrashedTopup>,
    pub pagination: PageInfo,
}

impl TrashedTopupPage {
    pub fn new(records: &[TopupRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
