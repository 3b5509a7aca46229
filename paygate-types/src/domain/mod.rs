//! Record shapes for the payment gateway entities.
//!
//! These are the flat structs repositories hand upward. They carry no
//! business rules - validation belongs to the layers that produce them.

pub mod card;
pub mod merchant;
pub mod role;
pub mod saldo;
pub mod token;
pub mod topup;
pub mod transaction;
pub mod transfer;
pub mod user;
pub mod withdraw;

pub use card::{CardProvider, CardRecord, CardType};
pub use merchant::{MerchantRecord, MerchantStatus};
pub use role::RoleRecord;
pub use saldo::SaldoRecord;
pub use token::TokenPair;
pub use topup::{TopupMethod, TopupRecord};
pub use transaction::{PaymentMethod, TransactionRecord};
pub use transfer::TransferRecord;
pub use user::UserRecord;
pub use withdraw::WithdrawRecord;
