//! Topup record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Channel a topup was funded through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopupMethod {
    BankTransfer,
    VirtualAccount,
    EWallet,
}

impl fmt::Display for TopupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopupMethod::BankTransfer => write!(f, "bank_transfer"),
            TopupMethod::VirtualAccount => write!(f, "virtual_account"),
            TopupMethod::EWallet => write!(f, "e_wallet"),
        }
    }
}

/// A topup row as repositories return it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopupRecord {
    pub id: i32,
    pub card_number: String,
    /// External reference number handed to the funding channel.
    pub topup_no: String,
    pub topup_amount: i64,
    pub topup_method: TopupMethod,
    pub topup_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
