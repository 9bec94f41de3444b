use crate::api::MembershipSummary;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipProgress {
    pub days_remaining: i64,
    /// Share of the membership term still left, `0..=100`.
    pub percent_remaining: u8,
}

pub fn membership_progress(summary: &MembershipSummary, today: NaiveDate) -> MembershipProgress {
    let days_remaining = (summary.valid_until - today).num_days().max(0);
    let term_days = (summary.valid_until - summary.started_on).num_days();
    let percent_remaining = if term_days <= 0 {
        0
    } else {
        let pct = (days_remaining * 100 + term_days / 2) / term_days;
        pct.clamp(0, 100) as u8
    };
    MembershipProgress {
        days_remaining,
        percent_remaining,
    }
}

pub fn format_days_remaining(days: i64) -> String {
    match days {
        d if d <= 0 => "Membership expired".to_string(),
        1 => "1 day remaining".to_string(),
        d => format!("{d} days remaining"),
    }
}
