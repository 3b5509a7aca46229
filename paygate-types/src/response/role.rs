//! Role response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::RoleRecord;

/// Role as returned by detail and active-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    pub id: i32,
    #[schema(example = "admin")]
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&RoleRecord> for RoleResponse {
    fn from(record: &RoleRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Role as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleResponseDeleteAt {
    pub id: i32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&RoleRecord> for RoleResponseDeleteAt {
    fn from(record: &RoleRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}
