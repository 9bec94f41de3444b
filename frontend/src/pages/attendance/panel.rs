use super::{components::history::HistoryTable, view_model::use_attendance_view_model};
use crate::{
    api::{ApiError, AttendanceRecord},
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
        layout::{ErrorMessage, LoadingSpinner},
    },
};
use leptos::{ev::MouseEvent, *};

/// Body of the records card once the fetch settles.
pub fn render_records(
    result: Result<Vec<AttendanceRecord>, ApiError>,
    on_retry: Callback<MouseEvent>,
) -> View {
    match result {
        Ok(list) => view! { <HistoryTable records=list /> }.into_view(),
        Err(err) => {
            log::error!("Failed to load attendance history: {}", err);
            view! {
                <ErrorMessage message=err.to_string() />
                <Button variant=ButtonVariant::Outline icon="fa-redo" on_click=on_retry>
                    "Retry"
                </Button>
            }
            .into_view()
        }
    }
}

#[component]
pub fn CustomerAttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let records = vm.records_resource;
    let on_retry = Callback::new(move |_| vm.refresh());

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">"My Attendance History"</h1>
            <Card title="Attendance Records">
                <Suspense fallback=move || view! { <LoadingSpinner /> }>
                    {move || records.get().map(|result| render_records(result, on_retry))}
                </Suspense>
            </Card>
        </div>
    }
}
