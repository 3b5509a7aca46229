//! Topup service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the topup service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopupError {
    #[error("topup not found")]
    NotFound,

    #[error("card not found for this topup")]
    CardNotFound,

    #[error("topup amount must be positive")]
    AmountInvalid,

    #[error("failed to fetch topups")]
    FindAllFailed,

    #[error("failed to fetch topup")]
    FindByIdFailed,

    #[error("failed to fetch topups for card")]
    FindByCardFailed,

    #[error("failed to create topup")]
    CreateFailed,

    #[error("failed to update topup")]
    UpdateFailed,

    #[error("failed to move topup to trash")]
    TrashFailed,

    #[error("failed to restore topup")]
    RestoreFailed,

    #[error("failed to permanently delete topup")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for TopupError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound | Self::CardNotFound => 404,
            Self::AmountInvalid => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "TOPUP_NOT_FOUND",
            Self::CardNotFound => "TOPUP_CARD_NOT_FOUND",
            Self::AmountInvalid => "TOPUP_AMOUNT_INVALID",
            Self::FindAllFailed => "TOPUP_FIND_ALL_FAILED",
            Self::FindByIdFailed => "TOPUP_FIND_BY_ID_FAILED",
            Self::FindByCardFailed => "TOPUP_FIND_BY_CARD_FAILED",
            Self::CreateFailed => "TOPUP_CREATE_FAILED",
            Self::UpdateFailed => "TOPUP_UPDATE_FAILED",
            Self::TrashFailed => "TOPUP_TRASH_FAILED",
            Self::RestoreFailed => "TOPUP_RESTORE_FAILED",
            Self::DeletePermanentFailed => "TOPUP_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}
