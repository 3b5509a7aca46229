//! GraphQL output models, one module per entity.
//!
//! Ids are coerced to `ID`, timestamps to RFC 3339 strings; trashed
//! variants add the delete marker. Each entity also gets concrete page
//! objects because `SimpleObject` does not derive over an open generic.

pub mod auth;
pub mod card;
pub mod merchant;
pub mod role;
pub mod saldo;
pub mod topup;
pub mod transaction;
pub mod transfer;
pub mod user;
pub mod withdraw;

pub use auth::TokenPayload;
pub use card::{Card, CardPage, TrashedCard, TrashedCardPage};
pub use merchant::{Merchant, MerchantPage, TrashedMerchant, TrashedMerchantPage};
pub use role::{Role, RolePage, TrashedRole, TrashedRolePage};
pub use saldo::{Saldo, SaldoPage, TrashedSaldo, TrashedSaldoPage};
pub use topup::{Topup, TopupPage, TrashedTopup, TrashedTopupPage};
pub use transaction::{Transaction, TransactionPage, TrashedTransaction, TrashedTransactionPage};
pub use transfer::{Transfer, TransferPage, TrashedTransfer, TrashedTransferPage};
pub use user::{TrashedUser, TrashedUserPage, User, UserPage};
pub use withdraw::{TrashedWithdraw, TrashedWithdrawPage, Withdraw, WithdrawPage};

use async_graphql::SimpleObject;

use paygate_types::response::PaginationMeta;

/// Pagination block attached to every page object.
#[derive(Debug, Clone, Copy, SimpleObject)]
pub struct PageInfo {
    pub current_page: i32,
    pub page_size: i32,
    pub total_records: i32,
    pub total_pages: i32,
}

impl From<&PaginationMeta> for PageInfo {
    fn from(meta: &PaginationMeta) -> Self {
        Self {
            current_page: meta.current_page,
            page_size: meta.page_size,
            total_records: meta.total_records,
            total_pages: meta.total_pages,
        }
    }
}
