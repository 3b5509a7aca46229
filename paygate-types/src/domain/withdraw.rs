//! Withdraw record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A withdrawal row as repositories return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRecord {
    pub id: i32,
    pub card_number: String,
    pub withdraw_amount: i64,
    pub withdraw_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
