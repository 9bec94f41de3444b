use crate::{
    components::layout::SuccessMessage,
    pages::dashboard::{
        components::{CheckInCard, MembershipCard, RecentActivity},
        view_model::use_dashboard_view_model,
    },
    state::{auth::use_auth, session::SessionTracker},
};
use leptos::*;

#[component]
pub fn CustomerDashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let member_name = move || {
        auth.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| user.name.clone())
                .unwrap_or_default()
        })
    };
    let activity = Signal::derive(move || vm.tracker.with(|t: &SessionTracker| t.activity().to_vec()));
    let dismiss = Callback::new(vm.dismiss_notice());

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">"Welcome, " {member_name}</h1>
                <p class="mt-1 text-sm text-gray-500">
                    "Track your gym activity and membership status"
                </p>
            </div>
            {move || {
                vm.notice
                    .get()
                    .map(|message| view! { <SuccessMessage message=message on_dismiss=dismiss /> })
            }}
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                <CheckInCard
                    tracker=vm.tracker
                    now=vm.now
                    on_check_in=Callback::new(vm.handle_check_in())
                    on_check_out=Callback::new(vm.handle_check_out())
                />
                <MembershipCard membership=vm.membership_resource />
            </div>
            <RecentActivity events=activity />
        </div>
    }
}
