//! Card record shape and card classification enums.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a card debits or credits against the holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Debit,
    Credit,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Debit => write!(f, "debit"),
            CardType::Credit => write!(f, "credit"),
        }
    }
}

/// Card network the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardProvider {
    Visa,
    Mastercard,
    Amex,
}

impl fmt::Display for CardProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardProvider::Visa => write!(f, "visa"),
            CardProvider::Mastercard => write!(f, "mastercard"),
            CardProvider::Amex => write!(f, "amex"),
        }
    }
}

/// A card row as repositories return it.
///
/// The CVV is present here because repositories need it for issuing
/// flows; no response mapper may ever copy it outward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: i32,
    pub user_id: i32,
    pub card_number: String,
    pub card_type: CardType,
    pub expire_date: NaiveDate,
    pub cvv: String,
    pub card_provider: CardProvider,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&CardType::Debit).unwrap(),
            "\"debit\""
        );
        assert_eq!(
            serde_json::to_string(&CardProvider::Mastercard).unwrap(),
            "\"mastercard\""
        );
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(CardType::Credit.to_string(), "credit");
        assert_eq!(CardProvider::Visa.to_string(), "visa");
    }
}
