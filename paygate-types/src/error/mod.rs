//! Error taxonomy for the payment gateway, segmented by layer and by
//! entity.
//!
//! Repository failures are one enum tagged with the [`Entity`] they
//! touched. Each entity then owns a service-level enum whose variants
//! are that entity's stable conditions. [`ErrorClass`] is the seam both
//! transports render through, so the REST body and the GraphQL
//! extensions always agree on (message, code, status).

pub mod auth;
pub mod card;
pub mod merchant;
pub mod repository;
pub mod role;
pub mod saldo;
pub mod topup;
pub mod transaction;
pub mod transfer;
pub mod user;
pub mod withdraw;

pub use auth::AuthError;
pub use card::CardError;
pub use merchant::MerchantError;
pub use repository::RepositoryError;
pub use role::RoleError;
pub use saldo::SaldoError;
pub use topup::TopupError;
pub use transaction::TransactionError;
pub use transfer::TransferError;
pub use user::UserError;
pub use withdraw::WithdrawError;

use std::fmt;

use crate::response::ErrorResponse;

/// Business entities the taxonomy is segmented by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Card,
    Merchant,
    Role,
    Saldo,
    Token,
    Topup,
    Transaction,
    Transfer,
    User,
    Withdraw,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Card => "card",
            Entity::Merchant => "merchant",
            Entity::Role => "role",
            Entity::Saldo => "saldo",
            Entity::Token => "token",
            Entity::Topup => "topup",
            Entity::Transaction => "transaction",
            Entity::Transfer => "transfer",
            Entity::User => "user",
            Entity::Withdraw => "withdraw",
        };
        write!(f, "{}", name)
    }
}

/// Classification every renderable gateway error implements.
///
/// The (message, code, status) triple for a condition is static: the
/// same condition always classifies the same way.
pub trait ErrorClass: std::error::Error {
    /// HTTP status this condition maps to.
    fn status_code(&self) -> u16;

    /// Stable machine-readable code, SCREAMING_SNAKE_CASE.
    fn error_code(&self) -> &'static str;

    /// Renders the REST error envelope for this condition.
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string(), self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_names() {
        assert_eq!(Entity::Saldo.to_string(), "saldo");
        assert_eq!(Entity::Withdraw.to_string(), "withdraw");
    }

    #[test]
    fn test_error_response_rendering() {
        let err = UserError::NotFound;
        let resp = err.to_error_response();
        assert_eq!(resp.status, "error");
        assert_eq!(resp.message, "user not found");
        assert_eq!(resp.code, 404);
    }
}
