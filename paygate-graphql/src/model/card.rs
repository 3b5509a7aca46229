//! Card output models.
//!
//! Neither model has a CVV field, mirroring the REST DTOs.

use async_graphql::{ID, SimpleObject};

use paygate_types::CardRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Card as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Card {
    pub id: ID,
    pub user_id: ID,
    pub card_number: String,
    pub card_type: String,
    /// Expiry rendered as `YYYY-MM-DD`.
    pub expire_date: String,
    pub card_provider: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&CardRecord> for Card {
    fn from(record: &CardRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            user_id: ID(record.user_id.to_string()),
            card_number: record.card_number.clone(),
            card_type: record.card_type.to_string(),
            expire_date: record.expire_date.format("%Y-%m-%d").to_string(),
            card_provider: record.card_provider.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed card, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedCard {
    pub id: ID,
    pub user_id: ID,
    pub card_number: String,
    pub card_type: String,
    pub expire_date: String,
    pub card_provider: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&CardRecord> for TrashedCard {
    fn from(record: &CardRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            user_id: ID(record.user_id.to_string()),
            card_number: record.card_number.clone(),
            card_type: record.card_type.to_string(),
            expire_date: record.expire_date.format("%Y-%m-%d").to_string(),
            card_provider: record.card_provider.to_string(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active cards.
#[derive(Debug, Clone, SimpleObject)]
pub struct CardPage {
    pub data: Vec<Card>,
    pub pagination: PageInfo,
}

impl CardPage {
    pub fn new(records: &[CardRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed cards.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedCardPage {
    pub data: Vec<TrashedCard>,
    pub pagination: PageInfo,
}

impl TrashedCardPage {
    pub fn new(records: &[CardRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
