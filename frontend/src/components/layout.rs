use crate::{
    components::guard::RequireCustomer,
    state::auth::{self, use_auth},
};
use leptos::*;

pub const CUSTOMER_NAV: &[(&str, &str)] = &[
    ("/customer", "Dashboard"),
    ("/customer/attendance", "Attendance"),
];

#[component]
pub fn CustomerSidebar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let member_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let sign_out_action = auth::use_sign_out_action();
    let sign_out_pending = sign_out_action.pending();
    create_effect(move |_| {
        if let Some(Err(err)) = sign_out_action.value().get() {
            log::error!("Sign-out failed: {}", err);
        }
    });
    let on_sign_out = move |_| {
        if sign_out_pending.get_untracked() {
            return;
        }
        sign_out_action.dispatch(());
    };

    view! {
        <aside class="w-64 bg-white border-r border-gray-200 flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-gray-200">
                <span class="text-xl font-semibold text-gray-900">"Gym Portal"</span>
            </div>
            <nav class="flex-1 px-4 py-6 space-y-1">
                {CUSTOMER_NAV
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a
                                href=href
                                class="block px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100 hover:text-gray-900"
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="px-4 py-4 border-t border-gray-200 space-y-2">
                <p class="text-sm text-gray-500 truncate">{member_name}</p>
                <button
                    on:click=on_sign_out
                    class="w-full text-left px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100 disabled:opacity-50"
                    disabled=move || sign_out_pending.get()
                >
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}

/// Shell for every customer page: access gate, sidebar and content area.
#[component]
pub fn CustomerLayout(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireCustomer>
            <div class="flex min-h-screen bg-gray-50">
                <CustomerSidebar />
                <main class="flex-1 p-8">{children()}</main>
            </div>
        </RequireCustomer>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-primary-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(
    #[prop(into)] message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex items-start justify-between bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded mb-4" role="status">
            <p class="text-sm">{message}</p>
            {on_dismiss.map(|cb| view! {
                <button
                    class="ml-4 text-sm text-green-700 hover:text-green-900"
                    aria-label="Dismiss"
                    on:click=move |_| cb.call(())
                >
                    "×"
                </button>
            })}
        </div>
    }
}
