use crate::api::{ApiClient, ApiError, AttendanceRecord};

/// Records in provider order; the table renders them as given.
pub async fn fetch_my_attendance(api: &ApiClient) -> Result<Vec<AttendanceRecord>, ApiError> {
    let records = api.get_my_attendance().await?;
    log::debug!("Loaded {} attendance records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockData;
    use crate::test_support::helpers::record;
    use futures::executor::block_on;

    #[test]
    fn returns_records_unchanged() {
        let records = vec![
            record("att-2", "2024-01-02T18:30:00", None),
            record("att-1", "2024-01-01T10:00:00", Some("2024-01-01T11:45:00")),
        ];
        let api = ApiClient::with_data(MockData {
            attendance: records.clone(),
            ..MockData::default()
        });
        assert_eq!(block_on(fetch_my_attendance(&api)).unwrap(), records);
    }

    #[test]
    fn signed_out_client_is_rejected() {
        let api = ApiClient::with_data(MockData::default());
        block_on(api.sign_out()).unwrap();
        assert_eq!(
            block_on(fetch_my_attendance(&api)),
            Err(ApiError::Unauthenticated)
        );
    }
}
