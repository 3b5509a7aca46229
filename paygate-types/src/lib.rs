//! # Paygate Types
//!
//! Domain records, response DTOs and the error taxonomy for the payment
//! gateway. This crate has ZERO external IO dependencies - only data
//! structures, pure mappers and error classifications.
//!
//! ## Architecture
//!
//! This crate is the shared core both transport adapters consume:
//! - `domain/` - Flat record shapes as repositories hand them upward
//! - `response/` - Wire envelopes, per-entity DTOs and record mappers
//! - `error/` - Repository and per-entity service errors with stable
//!   (message, code, HTTP status) classifications

pub mod domain;
pub mod error;
pub mod response;

// Re-export commonly used types
pub use domain::{
    CardProvider, CardRecord, CardType, MerchantRecord, MerchantStatus, PaymentMethod, RoleRecord,
    SaldoRecord, TokenPair, TopupMethod, TopupRecord, TransactionRecord, TransferRecord,
    UserRecord, WithdrawRecord,
};
pub use error::{
    AuthError, CardError, Entity, ErrorClass, MerchantError, RepositoryError, RoleError,
    SaldoError, TopupError, TransactionError, TransferError, UserError, WithdrawError,
};
pub use response::{
    ApiResponse, ApiResponsePagination, ErrorResponse, PaginationMeta, map_collection,
};
