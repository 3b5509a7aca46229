//! Saldo service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the saldo service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaldoError {
    #[error("saldo not found")]
    NotFound,

    #[error("card not found for this saldo")]
    CardNotFound,

    #[error("balance is insufficient")]
    InsufficientBalance,

    #[error("failed to fetch saldos")]
    FindAllFailed,

    #[error("failed to fetch saldo")]
    FindByIdFailed,

    #[error("failed to fetch saldo for card")]
    FindByCardFailed,

    #[error("failed to create saldo")]
    CreateFailed,

    #[error("failed to update saldo")]
    UpdateFailed,

    #[error("failed to update saldo balance")]
    UpdateBalanceFailed,

    #[error("failed to move saldo to trash")]
    TrashFailed,

    #[error("failed to restore saldo")]
    RestoreFailed,

    #[error("failed to permanently delete saldo")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for SaldoError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound | Self::CardNotFound => 404,
            Self::InsufficientBalance => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "SALDO_NOT_FOUND",
            Self::CardNotFound => "SALDO_CARD_NOT_FOUND",
            Self::InsufficientBalance => "SALDO_INSUFFICIENT_BALANCE",
            Self::FindAllFailed => "SALDO_FIND_ALL_FAILED",
            Self::FindByIdFailed => "SALDO_FIND_BY_ID_FAILED",
            Self::FindByCardFailed => "SALDO_FIND_BY_CARD_FAILED",
            Self::CreateFailed => "SALDO_CREATE_FAILED",
            Self::UpdateFailed => "SALDO_UPDATE_FAILED",
            Self::UpdateBalanceFailed => "SALDO_UPDATE_BALANCE_FAILED",
            Self::TrashFailed => "SALDO_TRASH_FAILED",
            Self::RestoreFailed => "SALDO_RESTORE_FAILED",
            Self::DeletePermanentFailed => "SALDO_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_balance_is_400() {
        let resp = SaldoError::InsufficientBalance.to_error_response();
        assert_eq!(resp.code, 400);
        assert_eq!(resp.message, "balance is insufficient");
    }
}
