//! Transaction output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::TransactionRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Purchase transaction as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Transaction {
    pub id: ID,
    pub card_number: String,
    pub amount: i64,
    pub payment_method: String,
    pub merchant_id: ID,
    pub transaction_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&TransactionRecord> for Transaction {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            card_number: record.card_number.clone(),
            amount: record.amount,
            payment_method: record.payment_method.to_string(),
            merchant_id: ID(record.merchant_id.to_string()),
            transaction_time: record.transaction_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed transaction, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedTransaction {
    pub id: ID,
    pub card_number: String,
    pub amount: i64,
    pub payment_method: String,
    pub merchant_id: ID,
    pub transaction_time: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&TransactionRecord> for TrashedTransaction {
    fn from(record: &TransactionRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            card_number: record.card_number.clone(),
            amount: record.amount,
            payment_method: record.payment_method.to_string(),
            merchant_id: ID(record.merchant_id.to_string()),
            transaction_time: record.transaction_time.to_rfc3339(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active transactions.
#[derive(Debug, Clone, SimpleObject)]
pub struct TransactionPage {
    pub data: Vec<Transaction>,
    pub pagination: PageInfo,
}

impl TransactionPage {
    pub fn new(records: &[TransactionRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed transactions.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedTransactionPage {
    pub data: Vec<TrashedTransaction>,
    pub pagination: PageInfo,
}

impl TrashedTransactionPage {
    pub fn new(records: &[TransactionRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
