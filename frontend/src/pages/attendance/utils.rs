use crate::api::AttendanceRecord;
use crate::utils::time::compute_duration;

pub const NO_ATTENDANCE_RECORDS: &str = "No attendance records found";

pub fn record_kind_label(record: &AttendanceRecord) -> &'static str {
    if record.check_out.is_some() {
        "Check-out"
    } else {
        "Check-in"
    }
}

/// Duration cell text. Records whose check-out precedes the check-in show "-".
pub fn duration_cell(record: &AttendanceRecord) -> String {
    match compute_duration(&record.check_in, record.check_out.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("Attendance record {} has no valid duration: {}", record.id, err);
            "-".to_string()
        }
    }
}
