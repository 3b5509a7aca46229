//! Transaction record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a purchase transaction was settled at the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Qris,
    BankTransfer,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Qris => write!(f, "qris"),
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
        }
    }
}

/// A purchase transaction row as repositories return it.
///
/// Rows are immutable history; `updated_at` only moves on
/// trash/restore transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub id: i32,
    pub card_number: String,
    pub amount: i64,
    pub payment_method: PaymentMethod,
    pub merchant_id: i32,
    pub transaction_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
