use crate::api::{ApiClient, ApiError, AttendanceRecord};
use crate::pages::attendance::repository;
use leptos::*;

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub records_resource: Resource<u32, Result<Vec<AttendanceRecord>, ApiError>>,
    reload: RwSignal<u32>,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let reload = create_rw_signal(0u32);
        let records_resource = create_resource(
            move || reload.get(),
            move |_| {
                let api = api.clone();
                async move { repository::fetch_my_attendance(&api).await }
            },
        );
        Self {
            records_resource,
            reload,
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|token| *token = token.wrapping_add(1));
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
