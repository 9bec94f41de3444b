use chrono::NaiveDateTime;
use leptos::*;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    CheckedOut,
    CheckedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    CheckIn,
    CheckOut,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::CheckIn => "check-in",
            ActivityKind::CheckOut => "check-out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::CheckIn => "Checked In",
            ActivityKind::CheckOut => "Checked Out",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            ActivityKind::CheckIn => "Successfully checked in!",
            ActivityKind::CheckOut => "Successfully checked out!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent {
    /// Position in call order; unique within one tracker.
    pub seq: u64,
    pub kind: ActivityKind,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("already checked in since {0}")]
    AlreadyCheckedIn(NaiveDateTime),
    #[error("not checked in")]
    NotCheckedIn,
}

/// Check-in state for the current page view.
///
/// The checked-in flag is derived from the stored check-in time, so the two
/// can never disagree. Only [`check_in`](Self::check_in) and
/// [`check_out`](Self::check_out) mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    checked_in_at: Option<NaiveDateTime>,
    activity: Vec<ActivityEvent>,
    next_seq: u64,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        if self.checked_in_at.is_some() {
            SessionStatus::CheckedIn
        } else {
            SessionStatus::CheckedOut
        }
    }

    pub fn is_checked_in(&self) -> bool {
        self.status() == SessionStatus::CheckedIn
    }

    pub fn checked_in_at(&self) -> Option<NaiveDateTime> {
        self.checked_in_at
    }

    /// Most recent event first.
    pub fn activity(&self) -> &[ActivityEvent] {
        &self.activity
    }

    pub fn check_in(&mut self, now: NaiveDateTime) -> Result<&ActivityEvent, SessionError> {
        if let Some(since) = self.checked_in_at {
            return Err(SessionError::AlreadyCheckedIn(since));
        }
        self.checked_in_at = Some(now);
        Ok(self.record(ActivityKind::CheckIn, now))
    }

    pub fn check_out(&mut self, now: NaiveDateTime) -> Result<&ActivityEvent, SessionError> {
        if self.checked_in_at.take().is_none() {
            return Err(SessionError::NotCheckedIn);
        }
        Ok(self.record(ActivityKind::CheckOut, now))
    }

    fn record(&mut self, kind: ActivityKind, timestamp: NaiveDateTime) -> &ActivityEvent {
        let event = ActivityEvent {
            seq: self.next_seq,
            kind,
            timestamp,
        };
        self.next_seq += 1;
        self.activity.insert(0, event);
        &self.activity[0]
    }
}

pub fn use_session_tracker() -> RwSignal<SessionTracker> {
    create_rw_signal(SessionTracker::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn starts_checked_out_with_empty_log() {
        let tracker = SessionTracker::new();
        assert_eq!(tracker.status(), SessionStatus::CheckedOut);
        assert!(tracker.checked_in_at().is_none());
        assert!(tracker.activity().is_empty());
    }

    #[test]
    fn check_in_then_out_builds_newest_first_log() {
        let mut tracker = SessionTracker::new();

        tracker.check_in(at(10, 0)).unwrap();
        assert_eq!(tracker.status(), SessionStatus::CheckedIn);
        assert_eq!(tracker.checked_in_at(), Some(at(10, 0)));
        assert_eq!(tracker.activity().len(), 1);
        assert_eq!(tracker.activity()[0].kind.as_str(), "check-in");

        tracker.check_out(at(11, 45)).unwrap();
        assert_eq!(tracker.status(), SessionStatus::CheckedOut);
        assert!(tracker.checked_in_at().is_none());
        assert_eq!(tracker.activity().len(), 2);
        assert_eq!(tracker.activity()[0].kind, ActivityKind::CheckOut);
        assert_eq!(tracker.activity()[0].timestamp, at(11, 45));
        assert_eq!(tracker.activity()[1].kind, ActivityKind::CheckIn);
    }

    #[test]
    fn cycles_without_terminal_state() {
        let mut tracker = SessionTracker::new();
        for round in 0..3 {
            tracker.check_in(at(8 + round, 0)).unwrap();
            tracker.check_out(at(8 + round, 30)).unwrap();
        }
        assert_eq!(tracker.status(), SessionStatus::CheckedOut);
        let seqs: Vec<u64> = tracker.activity().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn double_check_in_is_rejected_without_side_effects() {
        let mut tracker = SessionTracker::new();
        tracker.check_in(at(9, 0)).unwrap();
        let before = tracker.clone();

        let err = tracker.check_in(at(9, 5)).unwrap_err();
        assert_eq!(err, SessionError::AlreadyCheckedIn(at(9, 0)));
        assert_eq!(tracker, before);
    }

    #[test]
    fn check_out_while_checked_out_is_rejected() {
        let mut tracker = SessionTracker::new();
        assert_eq!(
            tracker.check_out(at(9, 0)).unwrap_err(),
            SessionError::NotCheckedIn
        );
        assert!(tracker.activity().is_empty());
        assert_eq!(tracker.status(), SessionStatus::CheckedOut);
    }

    #[test]
    fn labels_and_messages() {
        assert_eq!(ActivityKind::CheckIn.label(), "Checked In");
        assert_eq!(ActivityKind::CheckOut.label(), "Checked Out");
        assert_eq!(
            ActivityKind::CheckIn.success_message(),
            "Successfully checked in!"
        );
        assert_eq!(
            ActivityKind::CheckOut.success_message(),
            "Successfully checked out!"
        );
    }
}
