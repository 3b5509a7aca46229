//! User service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the user service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserError {
    #[error("user not found")]
    NotFound,

    #[error("email is already registered")]
    EmailTaken,

    #[error("password confirmation does not match")]
    PasswordMismatch,

    #[error("failed to fetch users")]
    FindAllFailed,

    #[error("failed to fetch user")]
    FindByIdFailed,

    #[error("failed to create user")]
    CreateFailed,

    #[error("failed to update user")]
    UpdateFailed,

    #[error("failed to move user to trash")]
    TrashFailed,

    #[error("failed to restore user")]
    RestoreFailed,

    #[error("failed to permanently delete user")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for UserError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::EmailTaken => 409,
            Self::PasswordMismatch => 400,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "USER_NOT_FOUND",
            Self::EmailTaken => "USER_EMAIL_TAKEN",
            Self::PasswordMismatch => "USER_PASSWORD_MISMATCH",
            Self::FindAllFailed => "USER_FIND_ALL_FAILED",
            Self::FindByIdFailed => "USER_FIND_BY_ID_FAILED",
            Self::CreateFailed => "USER_CREATE_FAILED",
            Self::UpdateFailed => "USER_UPDATE_FAILED",
            Self::TrashFailed => "USER_TRASH_FAILED",
            Self::RestoreFailed => "USER_RESTORE_FAILED",
            Self::DeletePermanentFailed => "USER_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_is_409() {
        assert_eq!(UserError::EmailTaken.status_code(), 409);
        assert_eq!(UserError::EmailTaken.error_code(), "USER_EMAIL_TAKEN");
    }

    #[test]
    fn test_operation_failures_are_500() {
        for err in [
            UserError::FindAllFailed,
            UserError::CreateFailed,
            UserError::TrashFailed,
            UserError::DeletePermanentFailed,
        ] {
            assert_eq!(err.status_code(), 500);
        }
    }

    #[test]
    fn test_same_condition_same_triple() {
        let a = UserError::NotFound.to_error_response();
        let b = UserError::NotFound.to_error_response();
        assert_eq!(a, b);
    }
}
