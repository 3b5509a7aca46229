//! # Paygate GraphQL
//!
//! GraphQL face of the gateway's response layer: `SimpleObject` output
//! models mapped from the same domain records the REST DTOs consume,
//! plus error extensions carrying the shared (code, status)
//! classification. Resolvers live with the schema wiring elsewhere;
//! this crate only shapes output.

pub mod error;
pub mod model;

pub use error::ClassifiedErrorExt;
pub use model::{
    Card, CardPage, Merchant, MerchantPage, PageInfo, Role, RolePage, Saldo, SaldoPage,
    TokenPayload, Topup, TopupPage, Transaction, TransactionPage, Transfer, TransferPage,
    TrashedCard, TrashedCardPage, TrashedMerchant, TrashedMerchantPage, TrashedRole,
    TrashedRolePage, TrashedSaldo, TrashedSaldoPage, TrashedTopup, TrashedTopupPage,
    TrashedTransaction, TrashedTransactionPage, TrashedTransfer, TrashedTransferPage, TrashedUser,
    TrashedUserPage, TrashedWithdraw, TrashedWithdrawPage, User, UserPage, Withdraw, WithdrawPage,
};
