use std::rc::Rc;

use serde::Deserialize;

use crate::api::types::*;
use crate::utils::storage::{default_session_store, SessionStore};

const BUNDLED_MOCK_DATA: &str = include_str!("mock_data.json");

/// Snapshot served by [`ApiClient`] in place of a backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MockData {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub membership: Option<MembershipSummary>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl MockData {
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        serde_json::from_str(raw).map_err(|e| ApiError::decode("mock data", e))
    }

    pub fn bundled() -> Result<Self, ApiError> {
        Self::from_json(BUNDLED_MOCK_DATA)
    }
}

/// Read-only data provider for the customer pages.
///
/// Shared through Leptos context. The signed-in flag lives in a
/// [`SessionStore`], so a sign-out is seen by every clone and by the client
/// built after the next page load.
#[derive(Clone)]
pub struct ApiClient {
    data: Rc<Result<MockData, ApiError>>,
    session: Rc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new() -> Self {
        let data = MockData::bundled();
        if let Err(err) = &data {
            log::error!("Bundled mock data is unusable: {}", err);
        }
        Self {
            data: Rc::new(data),
            session: default_session_store(),
        }
    }

    pub fn with_data(data: MockData) -> Self {
        Self::with_store(data, default_session_store())
    }

    pub fn with_store(data: MockData, session: Rc<dyn SessionStore>) -> Self {
        Self {
            data: Rc::new(Ok(data)),
            session,
        }
    }

    fn ensure_signed_in(&self) -> Result<(), ApiError> {
        if self.session.is_signed_in() {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }

    fn data(&self) -> Result<&MockData, ApiError> {
        (*self.data).as_ref().map_err(Clone::clone)
    }

    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.ensure_signed_in()?;
        self.data()?.user.clone().ok_or(ApiError::Unauthenticated)
    }

    pub async fn get_my_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.ensure_signed_in()?;
        Ok(self.data()?.attendance.clone())
    }

    pub async fn get_my_membership(&self) -> Result<MembershipSummary, ApiError> {
        self.ensure_signed_in()?;
        self.data()?
            .membership
            .clone()
            .ok_or_else(|| ApiError::NotFound("membership".into()))
    }

    /// Restores the bundled member session. Credentials are not checked.
    pub async fn sign_in(&self) -> Result<UserProfile, ApiError> {
        let user = self.data()?.user.clone().ok_or(ApiError::Unauthenticated)?;
        self.session.set_signed_in(true).map_err(ApiError::storage)?;
        Ok(user)
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.session
            .set_signed_in(false)
            .map_err(ApiError::storage)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{customer_user, record};
    use crate::utils::storage::MemorySessionStore;

    #[test]
    fn bundled_mock_data_parses() {
        let data = MockData::bundled().unwrap();
        assert!(data.user.as_ref().is_some_and(UserProfile::is_customer));
        assert!(data.membership.is_some());
        assert!(!data.attendance.is_empty());
        assert!(data.attendance.iter().any(AttendanceRecord::is_open));
    }

    #[test]
    fn malformed_mock_data_is_a_decode_error() {
        let err = MockData::from_json("{\"attendance\": 3}").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn serves_records_in_provider_order() {
        let api = ApiClient::with_data(MockData {
            user: Some(customer_user()),
            membership: None,
            attendance: vec![
                record("b", "2024-01-02T10:00:00", None),
                record("a", "2024-01-01T10:00:00", Some("2024-01-01T11:00:00")),
            ],
        });
        let records = api.get_my_attendance().await.unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[tokio::test]
    async fn missing_membership_is_not_found() {
        let api = ApiClient::with_data(MockData {
            user: Some(customer_user()),
            ..MockData::default()
        });
        let err = api.get_my_membership().await.unwrap_err();
        assert_eq!(err, ApiError::NotFound("membership".into()));
    }

    #[tokio::test]
    async fn sign_out_is_shared_between_clones() {
        let api = ApiClient::with_data(MockData {
            user: Some(customer_user()),
            ..MockData::default()
        });
        let other = api.clone();
        assert!(other.get_me().await.is_ok());

        api.sign_out().await.unwrap();
        assert_eq!(other.get_me().await, Err(ApiError::Unauthenticated));
        assert_eq!(
            other.get_my_attendance().await,
            Err(ApiError::Unauthenticated)
        );
    }

    #[tokio::test]
    async fn sign_out_survives_a_reload() {
        let store = MemorySessionStore::default();
        let data = MockData::bundled().unwrap();
        let api = ApiClient::with_store(data.clone(), Rc::new(store.clone()));
        api.sign_out().await.unwrap();

        let reloaded = ApiClient::with_store(data.clone(), Rc::new(store.clone()));
        assert_eq!(reloaded.get_me().await, Err(ApiError::Unauthenticated));

        reloaded.sign_in().await.unwrap();
        let after_sign_in = ApiClient::with_store(data, Rc::new(store));
        assert!(after_sign_in.get_me().await.is_ok_and(|user| user.is_customer()));
    }
}
