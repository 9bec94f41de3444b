use crate::api::{ApiClient, ApiError, UserProfile};
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// Snapshot of the signed-in user as seen by the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::loading());

    let api_client = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        load_profile(&api_client, set_auth_state).await;
    });

    (auth_state, set_auth_state)
}

/// Owns the auth snapshot for everything below it.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn load_profile(api_client: &ApiClient, set_auth_state: WriteSignal<AuthState>) {
    set_auth_state.update(|state| state.is_loading = true);
    match api_client.get_me().await {
        Ok(user) => {
            log::debug!("Signed in as {} ({})", user.id, user.role);
            set_auth_state.set(AuthState::signed_in(user));
        }
        Err(err) => {
            log::info!("No active session: {}", err);
            set_auth_state.set(AuthState::default());
        }
    }
}

pub async fn sign_in(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserProfile, ApiError> {
    set_auth_state.update(|state| state.is_loading = true);
    match api_client.sign_in().await {
        Ok(user) => {
            log::info!("Signed in as {}", user.id);
            set_auth_state.set(AuthState::signed_in(user.clone()));
            Ok(user)
        }
        Err(err) => {
            set_auth_state.set(AuthState::default());
            Err(err)
        }
    }
}

pub fn use_sign_in_action() -> Action<(), Result<UserProfile, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { sign_in(&api, set_auth).await }
    })
}

pub async fn sign_out(
    api_client: &ApiClient,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = api_client.sign_out().await;
    set_auth_state.set(AuthState::default());
    result
}

pub fn use_sign_out_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { sign_out(&api, set_auth).await }
    })
}
