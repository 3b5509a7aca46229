//! Merchant service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the merchant service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MerchantError {
    #[error("merchant not found")]
    NotFound,

    #[error("merchant name is already in use")]
    NameTaken,

    #[error("merchant api key is invalid")]
    ApiKeyInvalid,

    #[error("failed to fetch merchants")]
    FindAllFailed,

    #[error("failed to fetch merchant")]
    FindByIdFailed,

    #[error("failed to fetch merchant by api key")]
    FindByApiKeyFailed,

    #[error("failed to create merchant")]
    CreateFailed,

    #[error("failed to update merchant")]
    UpdateFailed,

    #[error("failed to update merchant status")]
    UpdateStatusFailed,

    #[error("failed to move merchant to trash")]
    TrashFailed,

    #[error("failed to restore merchant")]
    RestoreFailed,

    #[error("failed to permanently delete merchant")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for MerchantError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::NameTaken => 409,
            Self::ApiKeyInvalid => 401,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "MERCHANT_NOT_FOUND",
            Self::NameTaken => "MERCHANT_NAME_TAKEN",
            Self::ApiKeyInvalid => "MERCHANT_API_KEY_INVALID",
            Self::FindAllFailed => "MERCHANT_FIND_ALL_FAILED",
            Self::FindByIdFailed => "MERCHANT_FIND_BY_ID_FAILED",
            Self::FindByApiKeyFailed => "MERCHANT_FIND_BY_API_KEY_FAILED",
            Self::CreateFailed => "MERCHANT_CREATE_FAILED",
            Self::UpdateFailed => "MERCHANT_UPDATE_FAILED",
            Self::UpdateStatusFailed => "MERCHANT_UPDATE_STATUS_FAILED",
            Self::TrashFailed => "MERCHANT_TRASH_FAILED",
            Self::RestoreFailed => "MERCHANT_RESTORE_FAILED",
            Self::DeletePermanentFailed => "MERCHANT_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_condition_is_401() {
        assert_eq!(MerchantError::ApiKeyInvalid.status_code(), 401);
        assert_eq!(
            MerchantError::ApiKeyInvalid.error_code(),
            "MERCHANT_API_KEY_INVALID"
        );
    }
}
