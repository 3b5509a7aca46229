//! Role service-level conditions.

use super::{ErrorClass, RepositoryError};

/// Conditions the role service surfaces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("role not found")]
    NotFound,

    #[error("role name is already in use")]
    NameTaken,

    #[error("failed to fetch roles")]
    FindAllFailed,

    #[error("failed to fetch role")]
    FindByIdFailed,

    #[error("failed to fetch roles for user")]
    FindByUserFailed,

    #[error("failed to create role")]
    CreateFailed,

    #[error("failed to update role")]
    UpdateFailed,

    #[error("failed to assign role to user")]
    AssignFailed,

    #[error("failed to move role to trash")]
    TrashFailed,

    #[error("failed to restore role")]
    RestoreFailed,

    #[error("failed to permanently delete role")]
    DeletePermanentFailed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ErrorClass for RoleError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::NameTaken => 409,
            Self::Repository(err) => err.status_code(),
            _ => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "ROLE_NOT_FOUND",
            Self::NameTaken => "ROLE_NAME_TAKEN",
            Self::FindAllFailed => "ROLE_FIND_ALL_FAILED",
            Self::FindByIdFailed => "ROLE_FIND_BY_ID_FAILED",
            Self::FindByUserFailed => "ROLE_FIND_BY_USER_FAILED",
            Self::CreateFailed => "ROLE_CREATE_FAILED",
            Self::UpdateFailed => "ROLE_UPDATE_FAILED",
            Self::AssignFailed => "ROLE_ASSIGN_FAILED",
            Self::TrashFailed => "ROLE_TRASH_FAILED",
            Self::RestoreFailed => "ROLE_RESTORE_FAILED",
            Self::DeletePermanentFailed => "ROLE_DELETE_PERMANENT_FAILED",
            Self::Repository(err) => err.error_code(),
        }
    }
}
