//! Transaction service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the transaction service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("transaction not found")]
    NotFound,

    #[error("card not found for this transaction")]
    CardNotFound,

    #[error("merchant not found for this transaction")]
    MerchantNotFound,

    #[error("merchant api key is invalid")]
    ApiKeyInvalid,

    #[error("balance is insufficient for this transaction")]
    InsufficientBalance,

    #[error("failed to fetch transactions")]
    FindAllFailed,

    #[error("failed to fetch transaction")]
    FindByIdFailed,

    #[error("failed to fetch transactions for card")]
    FindByCardFailed,

    #[error("failed to fetch transactions for merchant")]
    FindByMerchantFailed,

    #[error("failed to create transaction")]
    CreateFailed,

    #[error("failed to update transaction")]
    UpdateFailed,

    #[error("failed to move transaction to trash")]
    TrashFailed,

    #[error("failed to restore transaction")]
    RestoreFailed,

    #[error("failed to permanently delete transaction")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for TransactionError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound | Self::CardNotFound | Self::MerchantNotFound => 404,
            Self::ApiKeyInvalid => 401,
            Self::InsufficientBalance => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "TRANSACTION_NOT_FOUND",
            Self::CardNotFound => "TRANSACTION_CARD_NOT_FOUND",
            Self::MerchantNotFound => "TRANSACTION_MERCHANT_NOT_FOUND",
            Self::ApiKeyInvalid => "TRANSACTION_API_KEY_INVALID",
            Self::InsufficientBalance => "TRANSACTION_INSUFFICIENT_BALANCE",
            Self::FindAllFailed => "TRANSACTION_FIND_ALL_FAILED",
            Self::FindByIdFailed => "TRANSACTION_FIND_BY_ID_FAILED",
            Self::FindByCardFailed => "TRANSACTION_FIND_BY_CARD_FAILED",
            Self::FindByMerchantFailed => "TRANSACTION_FIND_BY_MERCHANT_FAILED",
            Self::CreateFailed => "TRANSACTION_CREATE_FAILED",
            Self::UpdateFailed => "TRANSACTION_UPDATE_FAILED",
            Self::TrashFailed => "TRANSACTION_TRASH_FAILED",
            Self::RestoreFailed => "TRANSACTION_RESTORE_FAILED",
            Self::DeletePermanentFailed => "TRANSACTION_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_entity_lookups_are_404() {
        assert_eq!(TransactionError::CardNotFound.status_code(), 404);
        assert_eq!(TransactionError::MerchantNotFound.status_code(), 404);
    }

    #[test]
    fn test_api_key_condition_is_401() {
        assert_eq!(TransactionError::ApiKeyInvalid.status_code(), 401);
    }
}
