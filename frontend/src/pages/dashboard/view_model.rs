use crate::api::{ApiClient, ApiError, MembershipSummary};
use crate::state::session::{use_session_tracker, ActivityKind, SessionError, SessionTracker};
use crate::utils::time::now_local;
use chrono::NaiveDateTime;
use leptos::{ev::MouseEvent, *};

#[cfg(target_arch = "wasm32")]
const CLOCK_TICK_MS: u32 = 60_000;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub tracker: RwSignal<SessionTracker>,
    pub notice: RwSignal<Option<String>>,
    pub now: RwSignal<NaiveDateTime>,
    pub membership_resource: Resource<(), Result<MembershipSummary, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let tracker = use_session_tracker();
        let notice = create_rw_signal(None);
        let now = create_rw_signal(now_local());

        let membership_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                async move { api.get_my_membership().await }
            },
        );

        #[cfg(target_arch = "wasm32")]
        {
            // Dropped (and cancelled) with the owning component.
            let _ticker = store_value(gloo_timers::callback::Interval::new(CLOCK_TICK_MS, move || {
                now.set(now_local());
            }));
        }

        Self {
            tracker,
            notice,
            now,
            membership_resource,
        }
    }

    pub fn check_in_at(&self, at: NaiveDateTime) -> Result<(), SessionError> {
        self.apply(ActivityKind::CheckIn, at)
    }

    pub fn check_out_at(&self, at: NaiveDateTime) -> Result<(), SessionError> {
        self.apply(ActivityKind::CheckOut, at)
    }

    fn apply(&self, kind: ActivityKind, at: NaiveDateTime) -> Result<(), SessionError> {
        let mut outcome = Ok(());
        self.tracker.update(|tracker| {
            outcome = match kind {
                ActivityKind::CheckIn => tracker.check_in(at).map(|_| ()),
                ActivityKind::CheckOut => tracker.check_out(at).map(|_| ()),
            };
        });
        if outcome.is_ok() {
            log::info!("Member {} at {}", kind.as_str(), at);
            self.now.set(at);
            self.notice.set(Some(kind.success_message().to_string()));
        }
        outcome
    }

    /// Click path: a rejected transition is logged and leaves the page as it was.
    pub fn record_click(&self, kind: ActivityKind, at: NaiveDateTime) {
        if let Err(err) = self.apply(kind, at) {
            log::warn!("Ignoring {}: {}", kind.as_str(), err);
        }
    }

    pub fn handle_check_in(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_| vm.record_click(ActivityKind::CheckIn, now_local())
    }

    pub fn handle_check_out(&self) -> impl Fn(MouseEvent) {
        let vm = *self;
        move |_| vm.record_click(ActivityKind::CheckOut, now_local())
    }

    pub fn dismiss_notice(&self) -> impl Fn(()) {
        let notice = self.notice;
        move |_| notice.set(None)
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
