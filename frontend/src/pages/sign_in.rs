use crate::{
    components::{
        common::Button,
        guard::replace_location,
        layout::ErrorMessage,
    },
    state::auth,
};
use leptos::*;

pub const AFTER_SIGN_IN_PATH: &str = "/customer";

#[component]
pub fn SignInPage() -> impl IntoView {
    let sign_in_action = auth::use_sign_in_action();
    let pending = sign_in_action.pending();
    let (error, set_error) = create_signal(None::<String>);

    create_effect(move |_| match sign_in_action.value().get() {
        Some(Ok(_)) => {
            set_error.set(None);
            replace_location(AFTER_SIGN_IN_PATH);
        }
        Some(Err(err)) => {
            log::warn!("Sign-in failed: {}", err);
            set_error.set(Some(err.to_string()));
        }
        None => {}
    });

    let on_sign_in = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        sign_in_action.dispatch(());
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Sign in to Gym Portal"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Member area for check-ins, attendance and membership status"
                    </p>
                </div>
                {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
                <Button
                    class="w-full"
                    icon="fa-sign-in-alt"
                    disabled=Signal::derive(move || pending.get())
                    on_click=on_sign_in
                >
                    "Continue as member"
                </Button>
            </div>
        </div>
    }
}
