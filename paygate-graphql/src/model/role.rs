//! Role output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::RoleRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// Access role as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct Role {
    pub id: ID,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&RoleRecord> for Role {
    fn from(record: &RoleRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            name: record.name.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed role, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedRole {
    pub id: ID,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&RoleRecord> for TrashedRole {
    fn from(record: &RoleRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            name: record.name.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active roles.
#[derive(Debug, Clone, SimpleObject)]
pub struct RolePage {
    pub data: Vec<Role>,
    pub pagination: PageInfo,
}

impl RolePage {
    pub fn new(records: &[RoleRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed roles.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedRolePage {
    pub data: Vec<TrashedRole>,
    pub pagination: PageInfo,
}

impl TrashedRolePage {
    pub fn new(records: &[RoleRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
