//! Transfer service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the transfer service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    #[error("transfer not found")]
    NotFound,

    #[error("sender card not found")]
    SenderNotFound,

    #[error("receiver card not found")]
    ReceiverNotFound,

    #[error("balance is insufficient for this transfer")]
    InsufficientBalance,

    #[error("transfer source and destination are the same card")]
    SameCard,

    #[error("transfer amount must be positive")]
    AmountInvalid,

    #[error("failed to fetch transfers")]
    FindAllFailed,

    #[error("failed to fetch transfer")]
    FindByIdFailed,

    #[error("failed to fetch transfers for card")]
    FindByCardFailed,

    #[error("failed to create transfer")]
    CreateFailed,

    #[error("failed to update transfer")]
    UpdateFailed,

    #[error("failed to move transfer to trash")]
    TrashFailed,

    #[error("failed to restore transfer")]
    RestoreFailed,

    #[error("failed to permanently delete transfer")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for TransferError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound | Self::SenderNotFound | Self::ReceiverNotFound => 404,
            Self::InsufficientBalance | Self::SameCard | Self::AmountInvalid => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "TRANSFER_NOT_FOUND",
            Self::SenderNotFound => "TRANSFER_SENDER_NOT_FOUND",
            Self::ReceiverNotFound => "TRANSFER_RECEIVER_NOT_FOUND",
            Self::InsufficientBalance => "TRANSFER_INSUFFICIENT_BALANCE",
            Self::SameCard => "TRANSFER_SAME_CARD",
            Self::AmountInvalid => "TRANSFER_AMOUNT_INVALID",
            Self::FindAllFailed => "TRANSFER_FIND_ALL_FAILED",
            Self::FindByIdFailed => "TRANSFER_FIND_BY_ID_FAILED",
            Self::FindByCardFailed => "TRANSFER_FIND_BY_CARD_FAILED",
            Self::CreateFailed => "TRANSFER_CREATE_FAILED",
            Self::UpdateFailed => "TRANSFER_UPDATE_FAILED",
            Self::TrashFailed => "TRANSFER_TRASH_FAILED",
            Self::RestoreFailed => "TRANSFER_RESTORE_FAILED",
            Self::DeletePermanentFailed => "TRANSFER_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_card_is_rejected_as_400() {
        let resp = TransferError::SameCard.to_error_response();
        assert_eq!(resp.code, 400);
        assert_eq!(
            resp.message,
            "transfer source and destination are the same card"
        );
    }
}
