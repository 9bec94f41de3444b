#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{AttendanceRecord, MembershipSummary, UserProfile};
    use chrono::{NaiveDate, NaiveDateTime};

    pub fn customer_user() -> UserProfile {
        UserProfile {
            id: "cust-1".into(),
            name: "Casey Member".into(),
            email: Some("casey@example.com".into()),
            role: "customer".into(),
        }
    }

    pub fn admin_user() -> UserProfile {
        UserProfile {
            id: "admin-1".into(),
            name: "Front Desk".into(),
            email: None,
            role: "admin".into(),
        }
    }

    pub fn at(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    pub fn record(id: &str, check_in: &str, check_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            check_in: at(check_in),
            check_out: check_out.map(at),
        }
    }

    pub fn membership(started_on: &str, valid_until: &str) -> MembershipSummary {
        MembershipSummary {
            plan: "Premium Membership".into(),
            started_on: NaiveDate::parse_from_str(started_on, "%Y-%m-%d").unwrap(),
            valid_until: NaiveDate::parse_from_str(valid_until, "%Y-%m-%d").unwrap(),
        }
    }
}
