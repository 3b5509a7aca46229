//! Merchant record shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a merchant account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MerchantStatus {
    Active,
    Inactive,
    Suspended,
}

impl fmt::Display for MerchantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerchantStatus::Active => write!(f, "active"),
            MerchantStatus::Inactive => write!(f, "inactive"),
            MerchantStatus::Suspended => write!(f, "suspended"),
        }
    }
}

/// A merchant row as repositories return it.
///
/// `api_key` is the merchant's own credential; it only surfaces through
/// owner-facing responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantRecord {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub api_key: String,
    pub status: MerchantStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
