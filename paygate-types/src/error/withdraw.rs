//! Withdraw service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the withdraw service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WithdrawError {
    #[error("withdrawal not found")]
    NotFound,

    #[error("card not found for this withdrawal")]
    CardNotFound,

    #[error("balance is insufficient for this withdrawal")]
    InsufficientBalance,

    #[error("withdrawal amount must be positive")]
    AmountInvalid,

    #[error("failed to fetch withdrawals")]
    FindAllFailed,

    #[error("failed to fetch withdrawal")]
    FindByIdFailed,

    #[error("failed to fetch withdrawals for card")]
    FindByCardFailed,

    #[error("failed to create withdrawal")]
    CreateFailed,

    #[error("failed to update withdrawal")]
    UpdateFailed,

    #[error("failed to move withdrawal to trash")]
    TrashFailed,

    #[error("failed to restore withdrawal")]
    RestoreFailed,

    #[error("failed to permanently delete withdrawal")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for WithdrawError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound | Self::CardNotFound => 404,
            Self::InsufficientBalance | Self::AmountInvalid => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "WITHDRAW_NOT_FOUND",
            Self::CardNotFound => "WITHDRAW_CARD_NOT_FOUND",
            Self::InsufficientBalance => "WITHDRAW_INSUFFICIENT_BALANCE",
            Self::AmountInvalid => "WITHDRAW_AMOUNT_INVALID",
            Self::FindAllFailed => "WITHDRAW_FIND_ALL_FAILED",
            Self::FindByIdFailed => "WITHDRAW_FIND_BY_ID_FAILED",
            Self::FindByCardFailed => "WITHDRAW_FIND_BY_CARD_FAILED",
            Self::CreateFailed => "WITHDRAW_CREATE_FAILED",
            Self::UpdateFailed => "WITHDRAW_UPDATE_FAILED",
            Self::TrashFailed => "WITHDRAW_TRASH_FAILED",
            Self::RestoreFailed => "WITHDRAW_RESTORE_FAILED",
            Self::DeletePermanentFailed => "WITHDRAW_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_is_400() {
        assert_eq!(WithdrawError::InsufficientBalance.status_code(), 400);
    }

    #[test]
    fn test_repository_connection_failure_surfaces_as_503() {
        let err = WithdrawError::from(RepositoryError::ConnectionFailed(
            "pool exhausted".to_string(),
        ));
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.error_code(), "CONNECTION_FAILED");
    }
}
