use crate::{
    components::cards::Card,
    state::session::ActivityEvent,
    utils::time::format_timestamp,
};
use leptos::*;

pub const NO_RECENT_ACTIVITY: &str = "No recent activity";

#[component]
pub fn RecentActivity(#[prop(into)] events: Signal<Vec<ActivityEvent>>) -> impl IntoView {
    view! {
        <Card title="Recent Activity">
            <div class="space-y-4">
                <Show
                    when=move || events.with(|list| !list.is_empty())
                    fallback=|| view! {
                        <p class="text-center text-gray-500 py-4">{NO_RECENT_ACTIVITY}</p>
                    }
                >
                    <For
                        each=move || events.get()
                        key=|event| event.seq
                        children=move |event: ActivityEvent| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-200 last:border-0">
                                    <div class="flex items-center">
                                        <i class="far fa-clock w-5 h-5 text-gray-400 mr-3" aria-hidden="true"></i>
                                        <div>
                                            <p class="font-medium" data-kind=event.kind.as_str()>
                                                {event.kind.label()}
                                            </p>
                                            <p class="text-sm text-gray-500">
                                                {format_timestamp(&event.timestamp)}
                                            </p>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </Card>
    }
}
