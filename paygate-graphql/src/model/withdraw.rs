//! Withdraw output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::WithdrawRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Withdrawal as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Withdraw {
    pub id: ID,
    pub card_number: String,
    pub withdraw_amount: i64,
    pub withdraw_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&WithdrawRecord> for Withdraw {
    fn from(record: &WithdrawRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            card_number: record.card_number.clone(),
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed withdrawal, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedWithdraw {
    pub id: ID,
    pub card_number: String,
    pub withdraw_amount: i64,
    pub withdraw_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&WithdrawRecord> for TrashedWithdraw {
    fn from(record: &WithdrawRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            card_number: record.card_number.clone(),
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active withdrawals.
#[derive(Debug, Clone, SimpleObject)]
pub struct WithdrawPage {
    pub data: Vec<Withdraw>,
    pub pagination: PageInfo,
}

impl WithdrawPage {
    pub fn new(records: &[WithdrawRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed withdrawals.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedWithdrawPage {
    pub data: Vec<TrashedWithdraw>,
    pub pagination: PageInfo,
}

impl TrashedWithdrawPage {
    pub fn new(records: &[WithdrawRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
