use leptos::*;

/// White panel with a titled header, used by every customer page section.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("bg-white overflow-hidden shadow rounded-lg {}", class)>
            <div class="px-6 py-4 border-b border-gray-200">
                <h3 class="text-lg leading-6 font-medium text-gray-900">{title}</h3>
            </div>
            <div class="px-6 py-5">{children()}</div>
        </div>
    }
}

#[component]
pub fn Metric(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <p class="text-sm text-gray-500">{label}</p>
            <p class="text-lg font-semibold">{value}</p>
        </div>
    }
}
