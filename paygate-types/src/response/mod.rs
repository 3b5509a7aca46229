//! Transport-facing response shapes and the mappers that fill them.
//!
//! Every mapper is a pure field copy with type coercion: i32 ids stay
//! ids, timestamps become RFC 3339 strings, soft-delete markers stay
//! `Option`. List endpoints map element-wise through [`map_collection`].

pub mod auth;
pub mod card;
pub mod envelope;
pub mod merchant;
pub mod pagination;
pub mod role;
pub mod saldo;
pub mod topup;
pub mod transaction;
pub mod transfer;
pub mod user;
pub mod withdraw;

pub use auth::TokenResponse;
pub use card::{CardResponse, CardResponseDeleteAt};
pub use envelope::{ApiResponse, ApiResponsePagination, ErrorResponse};
pub use merchant::{MerchantResponse, MerchantResponseDeleteAt};
pub use pagination::PaginationMeta;
pub use role::{RoleResponse, RoleResponseDeleteAt};
pub use saldo::{SaldoResponse, SaldoResponseDeleteAt};
pub use topup::{TopupResponse, TopupResponseDeleteAt};
pub use transaction::{TransactionResponse, TransactionResponseDeleteAt};
pub use transfer::{TransferResponse, TransferResponseDeleteAt};
pub use user::{UserResponse, UserResponseDeleteAt};
pub use withdraw::{WithdrawResponse, WithdrawResponseDeleteAt};

/// Maps a slice of records element-wise into response DTOs,
/// preserving order.
pub fn map_collection<'a, R, T: From<&'a R>>(records: &'a [R]) -> Vec<T> {
    records.iter().map(T::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoleRecord;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_map_collection_preserves_order() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let records = vec![
            RoleRecord {
                id: 2,
                name: "admin".to_string(),
                created_at: ts,
                updated_at: ts,
                deleted_at: None,
            },
            RoleRecord {
                id: 1,
                name: "cashier".to_string(),
                created_at: ts,
                updated_at: ts,
                deleted_at: None,
            },
        ];

        let responses: Vec<RoleResponse> = map_collection(&records);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].id, 2);
        assert_eq!(responses[1].name, "cashier");
    }

    #[test]
    fn test_map_collection_empty() {
        let records: Vec<RoleRecord> = Vec::new();
        let responses: Vec<RoleResponse> = map_collection(&records);
        assert!(responses.is_empty());
    }
}
