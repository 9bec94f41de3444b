use crate::{
    components::layout::LoadingSpinner,
    config,
    state::auth::{use_auth, AuthState},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    Redirect(String),
    Allow,
}

/// Customer-only gate over an auth snapshot.
pub fn decide_access(state: &AuthState, sign_in_path: &str) -> AccessDecision {
    if state.is_loading {
        return AccessDecision::Loading;
    }
    match state.user.as_ref() {
        Some(user) if user.is_customer() => AccessDecision::Allow,
        _ => AccessDecision::Redirect(sign_in_path.to_string()),
    }
}

/// Navigates without leaving the gated page in session history.
pub fn replace_location(target: &str) {
    let Some(win) = web_sys::window() else {
        log::error!("Cannot redirect to {}: no window", target);
        return;
    };
    if let Err(err) = win.location().replace(target) {
        log::error!("Redirect to {} failed: {:?}", target, err);
    }
}

#[component]
pub fn RequireCustomer(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let sign_in_path = config::sign_in_path();
    let decision = create_memo(move |_| decide_access(&auth.get(), &sign_in_path));

    create_effect(move |_| {
        if let AccessDecision::Redirect(target) = decision.get() {
            log::warn!("Customer session required; redirecting to {}", target);
            replace_location(&target);
        }
    });

    view! {
        <Show
            when=move || decision.get() == AccessDecision::Allow
            fallback=move || {
                if decision.get() == AccessDecision::Loading {
                    view! {
                        <div class="min-h-screen flex items-center justify-center">
                            <LoadingSpinner />
                        </div>
                    }
                    .into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, customer_user};

    const SIGN_IN: &str = "/signin";

    #[test]
    fn loading_never_redirects() {
        for user in [None, Some(customer_user()), Some(admin_user())] {
            let state = AuthState {
                user,
                is_loading: true,
            };
            assert_eq!(decide_access(&state, SIGN_IN), AccessDecision::Loading);
        }
    }

    #[test]
    fn missing_user_goes_to_sign_in() {
        assert_eq!(
            decide_access(&AuthState::default(), SIGN_IN),
            AccessDecision::Redirect("/signin".into())
        );
    }

    #[test]
    fn non_customer_roles_go_to_sign_in() {
        assert_eq!(
            decide_access(&AuthState::signed_in(admin_user()), SIGN_IN),
            AccessDecision::Redirect("/signin".into())
        );
        let staff = crate::api::UserProfile {
            role: "staff".into(),
            ..customer_user()
        };
        assert_eq!(
            decide_access(&AuthState::signed_in(staff), "/login"),
            AccessDecision::Redirect("/login".into())
        );
    }

    #[test]
    fn customer_is_allowed() {
        assert_eq!(
            decide_access(&AuthState::signed_in(customer_user()), SIGN_IN),
            AccessDecision::Allow
        );
    }
}
