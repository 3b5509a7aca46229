//! Repository-layer failures.

use super::{Entity, ErrorClass};

/// Data-access failures, tagged with the entity being touched.
///
/// Service enums absorb these through their transparent `Repository`
/// variant; the tag keeps messages entity-specific without one enum
/// per entity at this layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} not found")]
    NotFound { entity: Entity },

    #[error("{entity} already exists for this {field}")]
    Duplicate { entity: Entity, field: &'static str },

    #[error("query against {entity} failed: {detail}")]
    QueryFailed { entity: Entity, detail: String },

    #[error("failed to decode {entity} row: {detail}")]
    RowDecode { entity: Entity, detail: String },

    #[error("database connection failed: {0}")]
    ConnectionFailed(String),
}

impl ErrorClass for RepositoryError {
    fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Duplicate { .. } => 409,
            Self::QueryFailed { .. } => 500,
            Self::RowDecode { .. } => 500,
            Self::ConnectionFailed(_) => 503,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "RESOURCE_NOT_FOUND",
            Self::Duplicate { .. } => "DUPLICATE_RESOURCE",
            Self::QueryFailed { .. } => "QUERY_FAILED",
            Self::RowDecode { .. } => "ROW_DECODE_FAILED",
            Self::ConnectionFailed(_) => "CONNECTION_FAILED",
        }
    }
}
