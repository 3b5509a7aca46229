//! User response DTOs and record mappers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserRecord;

/// User as returned by detail and active-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    #[schema(example = "Ada")]
    pub firstname: String,
    #[schema(example = "Lovelace")]
    pub lastname: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
}

impl From<&UserRecord> for UserResponse {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            email: record.email.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// User as returned by trashed-listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDeleteAt {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

impl From<&UserRecord> for UserResponseDeleteAt {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            firstname: record.firstname.clone(),
            lastname: record.lastname.clone(),
            email: record.email.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
            deleted_at: record.deleted_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_record() -> UserRecord {
        UserRecord {
            id: 42,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap(),
            deleted_at: None,
        }
    }

    #[test]
    fn test_maps_fields_one_to_one() {
        let record = sample_record();
        let resp = UserResponse::from(&record);
        assert_eq!(resp.id, 42);
        assert_eq!(resp.email, "ada@example.com");
        assert_eq!(resp.created_at, "2024-01-15T08:30:00+00:00");
    }

    #[test]
    fn test_delete_at_variant_carries_marker() {
        let mut record = sample_record();
        record.deleted_at = Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        let resp = UserResponseDeleteAt::from(&record);
        assert_eq!(resp.deleted_at.as_deref(), Some("2024-03-01T00:00:00+00:00"));
    }

    #[test]
    fn test_delete_at_absent_stays_none() {
        let resp = UserResponseDeleteAt::from(&sample_record());
        assert!(resp.deleted_at.is_none());
    }
}
