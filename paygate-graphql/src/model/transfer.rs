//! Transfer output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::TransferRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Card-to-card transfer as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Transfer {
    pub id: ID,
    pub transfer_from: String,
    pub transfer_to: String,
    pub transfer_amount: i64,
    pub transfer_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TransferRecord> for Transfer {
    fn from(record: &TransferRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            transfer_from: record.transfer_from.clone(),
            transfer_to: record.transfer_to.clone(),
            transfer_amount: record.transfer_amount,
            transfer_time: record.transfer_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed transfer, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedTransfer {
    pub id: ID,
    pub transfer_from: String,
    pub transfer_to: String,
    pub transfer_amount: i64,
    pub transfer_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&TransferRecord> for TrashedTransfer {
    fn from(record: &TransferRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
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

/// One page of active transfers.
#[derive(Debug, Clone, SimpleObject)]
pub struct TransferPage {
    pub data: Vec<Transfer>,
    pub pagination: PageInfo,
}

impl TransferPage {
    pub fn new(records: &[TransferRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed transfers.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedTransferPage {
    pub data: Vec<TrashedTransfer>,
    pub pagination: PageInfo,
}

impl TrashedTransferPage {
    pub fn new(records: &[TransferRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
