//! User output models.

use async_graphql::{ID, SimpleObject};

use paygate_types::UserRecord;
use paygate_types::response::{PaginationMeta, map_collection};

use super::PageInfo;

/// User as exposed through the GraphQL schema.
#[derive(Debug, Clone, SimpleObject)]
pub struct User {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            email: record.email.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Trashed user, carrying its delete marker.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedUser {
    pub id: ID,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&UserRecord> for TrashedUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: ID(record.id.to_string()),
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            email: record.email.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

/// One page of active users.
#[derive(Debug, Clone, SimpleObject)]
pub struct UserPage {
    pub data: Vec<User>,
    pub pagination: PageInfo,
}

impl UserPage {
    pub fn new(records: &[UserRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}

/// One page of trashed users.
#[derive(Debug, Clone, SimpleObject)]
pub struct TrashedUserPage {
    pub data: Vec<TrashedUser>,
    pub pagination: PageInfo,
}

impl TrashedUserPage {
    pub fn new(records: &[UserRecord], meta: PaginationMeta) -> Self {
        Self {
            data: map_collection(records),
            pagination: PageInfo::from(&meta),
        }
    }
}
