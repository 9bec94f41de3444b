use crate::{
    api::{ApiError, MembershipSummary},
    components::{
        cards::{Card, Metric},
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::dashboard::utils::{format_days_remaining, membership_progress},
    utils::time::{format_date, today_in_app_tz},
};
use chrono::NaiveDate;
use leptos::*;

#[component]
pub fn MembershipDetails(summary: MembershipSummary, today: NaiveDate) -> impl IntoView {
    let progress = membership_progress(&summary, today);

    view! {
        <div class="space-y-4">
            <Metric label="Current Plan" value=summary.plan.clone() />
            <Metric label="Valid Until" value=format_date(&summary.valid_until) />
            <div>
                <div class="w-full bg-gray-200 rounded-full h-2">
                    <div
                        class="bg-primary-600 h-2 rounded-full"
                        style=format!("width: {}%", progress.percent_remaining)
                    ></div>
                </div>
                <p class="mt-2 text-sm text-gray-500">
                    {format_days_remaining(progress.days_remaining)}
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn MembershipCard(
    membership: Resource<(), Result<MembershipSummary, ApiError>>,
) -> impl IntoView {
    view! {
        <Card title="Membership Status">
            <Suspense fallback=move || view! { <LoadingSpinner /> }>
                {move || {
                    membership
                        .get()
                        .map(|result| match result {
                            Ok(summary) => {
                                view! { <MembershipDetails summary=summary today=today_in_app_tz() /> }
                                    .into_view()
                            }
                            Err(err) => {
                                log::warn!("Membership unavailable: {}", err);
                                view! { <ErrorMessage message=err.to_string() /> }.into_view()
                            }
                        })
                }}
            </Suspense>
        </Card>
    }
}
