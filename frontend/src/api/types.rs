use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::storage::StorageError;

pub const CUSTOMER_ROLE: &str = "customer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
}

impl UserProfile {
    pub fn is_customer(&self) -> bool {
        self.role == CUSTOMER_ROLE
    }
}

/// A single visit as reported by the attendance provider.
///
/// A missing `check_out` means the member has not left yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub check_in: NaiveDateTime,
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipSummary {
    pub plan: String,
    pub started_on: NaiveDate,
    pub valid_until: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum ApiError {
    #[error("Sign-in required")]
    Unauthenticated,
    #[error("{0} was not found")]
    NotFound(String),
    #[error("Failed to decode {what}: {message}")]
    Decode { what: String, message: String },
    #[error("Session storage failed: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn decode(what: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            what: what.into(),
            message: err.to_string(),
        }
    }

    pub fn storage(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_without_check_out_is_open() {
        let record: AttendanceRecord = serde_json::from_value(json!({
            "id": "att-1",
            "check_in": "2024-01-01T10:00:00"
        }))
        .unwrap();
        assert!(record.is_open());

        let closed: AttendanceRecord = serde_json::from_value(json!({
            "id": "att-2",
            "check_in": "2024-01-01T10:00:00",
            "check_out": "2024-01-01T11:45:00"
        }))
        .unwrap();
        assert!(!closed.is_open());
    }

    #[test]
    fn only_customer_role_counts_as_customer() {
        let mut user = UserProfile {
            id: "u1".into(),
            name: "Sam".into(),
            email: None,
            role: "customer".into(),
        };
        assert!(user.is_customer());
        user.role = "admin".into();
        assert!(!user.is_customer());
        user.role = "Customer".into();
        assert!(!user.is_customer());
    }
}
