use crate::{
    components::{
        cards::Card,
        common::{Button, ButtonVariant},
    },
    state::session::SessionTracker,
    utils::time::{compute_duration, format_time_of_day},
};
use chrono::NaiveDateTime;
use leptos::{ev::MouseEvent, *};

/// Elapsed time for the open session, or "-" when the clock is behind the check-in.
fn elapsed_label(checked_in_at: &NaiveDateTime, now: &NaiveDateTime) -> String {
    compute_duration(checked_in_at, Some(now)).unwrap_or_else(|err| {
        log::warn!("Cannot show elapsed time: {}", err);
        "-".to_string()
    })
}

#[component]
pub fn CheckInCard(
    tracker: RwSignal<SessionTracker>,
    #[prop(into)] now: Signal<NaiveDateTime>,
    on_check_in: Callback<MouseEvent>,
    on_check_out: Callback<MouseEvent>,
) -> impl IntoView {
    let checked_in_at = create_memo(move |_| tracker.with(SessionTracker::checked_in_at));

    view! {
        <Card title="Quick Check In/Out">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-500">"Current Status"</p>
                    <p class="text-lg font-semibold">
                        {move || {
                            if checked_in_at.get().is_some() {
                                "Checked In"
                            } else {
                                "Not Checked In"
                            }
                        }}
                    </p>
                    {move || {
                        checked_in_at.get().map(|since| {
                            view! {
                                <div class="mt-2 space-y-1">
                                    <p class="text-sm text-gray-500">
                                        "Check-in Time: " {format_time_of_day(&since)}
                                    </p>
                                    <p class="text-sm text-gray-500">
                                        "Time Elapsed: " {move || elapsed_label(&since, &now.get())}
                                    </p>
                                </div>
                            }
                        })
                    }}
                </div>
                <Show
                    when=move || checked_in_at.get().is_some()
                    fallback=move || view! {
                        <Button icon="fa-check-circle" on_click=on_check_in>
                            "Check In"
                        </Button>
                    }
                >
                    <Button variant=ButtonVariant::Outline icon="fa-times-circle" on_click=on_check_out>
                        "Check Out"
                    </Button>
                </Show>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::at;

    #[test]
    fn elapsed_label_formats_open_session() {
        assert_eq!(
            elapsed_label(&at("2024-01-01T10:00:00"), &at("2024-01-01T11:05:00")),
            "1h 5m"
        );
    }

    #[test]
    fn elapsed_label_hides_clock_skew() {
        assert_eq!(
            elapsed_label(&at("2024-01-01T10:00:00"), &at("2024-01-01T09:00:00")),
            "-"
        );
    }
}
