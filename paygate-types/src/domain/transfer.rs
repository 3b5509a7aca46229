//! Transfer record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card-to-card transfer row as repositories return it.
///
/// `transfer_from` and `transfer_to` are card numbers, not card ids;
/// the gateway keys money movement by card number throughout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub id: i32,
    pub transfer_from: String,
    pub transfer_to: String,
    pub transfer_amount: i64,
    pub transfer_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
