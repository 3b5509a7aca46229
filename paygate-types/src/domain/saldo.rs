//! Saldo (card balance) record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A balance row keyed by card number.
///
/// `withdraw_amount` and `withdraw_time` reflect the most recent
/// withdrawal applied to the balance, when one exists. Amounts are in
/// the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaldoRecord {
    pub id: i32,
    pub card_number: String,
    pub total_balance: i64,
    pub withdraw_amount: Option<i64>,
    pub withdraw_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
