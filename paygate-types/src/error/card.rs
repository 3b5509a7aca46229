//! Card service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the card service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("card not found")]
    NotFound,

    #[error("card number is already registered")]
    CardNumberTaken,

    #[error("card expiry date is in the past")]
    ExpireDateInvalid,

    #[error("failed to fetch cards")]
    FindAllFailed,

    #[error("failed to fetch card")]
    FindByIdFailed,

    #[error("failed to fetch cards for user")]
    FindByUserFailed,

    #[error("failed to fetch card by card number")]
    FindByCardNumberFailed,

    #[error("failed to create card")]
    CreateFailed,

    #[error("failed to update card")]
    UpdateFailed,

    #[error("failed to move card to trash")]
    TrashFailed,

    #[error("failed to restore card")]
    RestoreFailed,

    #[error("failed to permanently delete card")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for CardError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::CardNumberTaken => 409,
            Self::ExpireDateInvalid => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "CARD_NOT_FOUND",
            Self::CardNumberTaken => "CARD_NUMBER_TAKEN",
            Self::ExpireDateInvalid => "CARD_EXPIRE_DATE_INVALID",
            Self::FindAllFailed => "CARD_FIND_ALL_FAILED",
            Self::FindByIdFailed => "CARD_FIND_BY_ID_FAILED",
            Self::FindByUserFailed => "CARD_FIND_BY_USER_FAILED",
            Self::FindByCardNumberFailed => "CARD_FIND_BY_NUMBER_FAILED",
            Self::CreateFailed => "CARD_CREATE_FAILED",
            Self::UpdateFailed => "CARD_UPDATE_FAILED",
            Self::TrashFailed => "CARD_TRASH_FAILED",
            Self::RestoreFailed => "CARD_RESTORE_FAILED",
            Self::DeletePermanentFailed => "CARD_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_condition_is_400() {
        assert_eq!(CardError::ExpireDateInvalid.status_code(), 400);
    }

    #[test]
    fn test_conflict_condition_is_409() {
        let resp = CardError::CardNumberTaken.to_error_response();
        assert_eq!(resp.code, 409);
        assert_eq!(resp.message, "card number is already registered");
    }
}
