//! Saldo output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::SaldoRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Card balance as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Saldo {
    pub id: ID,
    pub card_number: String,
    pub total_balance: i64,
    pub withdraw_amount: Option<i64>,
    pub withdraw_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&SaldoRecord> for Saldo {
    fn from(record: &SaldoRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            card_number: record.card_number.clone(),
            total_balance: record.total_balance,
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.map(|dt| dt.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed balance, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedSaldo {
    pub id: ID,
    pub card_number: String,
    pub total_balance: i64,
    pub withdraw_amount: Option<i64>,
    pub withdraw_time: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&SaldoRecord> for TrashedSaldo {
    fn from(record: &SaldoRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            card_number: record.card_number.clone(),
            total_balance: record.total_balance,
            withdraw_amount: record.withdraw_amount,
            withdraw_time: record.withdraw_time.map(|dt| dt.to_rfc3339()),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active balances.
#[derive(Debug, Clone, SimpleObject)]
pub struct SaldoPage {
    pub data: Vec<Saldo>,
    pub pagination: PageInfo,
}

impl SaldoPage {
    pub fn new(records: &[SaldoRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed balances.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedSaldoPage {
    pub data: Vec<TrashedSaldo>,
    pub pagination: PageInfo,
}

impl TrashedSaldoPage {
    pub fn new(records: &[SaldoRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
