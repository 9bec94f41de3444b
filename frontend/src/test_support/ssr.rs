use crate::{
    api::{ApiClient, MockData},
    state::auth::{AuthContext, AuthState},
};
use leptos::*;

/// Disposes the reactive runtime even when the test body panics.
struct RuntimeGuard(RuntimeId);

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        self.0.dispose();
    }
}

/// Keeps resources in their loading branch for as long as it lives.
struct SuspendedResources;

impl SuspendedResources {
    fn enter() -> Self {
        leptos_reactive::suppress_resource_load(true);
        Self
    }
}

impl Drop for SuspendedResources {
    fn drop(&mut self) {
        leptos_reactive::suppress_resource_load(false);
    }
}

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let _guard = RuntimeGuard(create_runtime());
    f()
}

/// SSR-renders `view` to HTML. Resources never load, so async data stays
/// behind its `Suspense` fallback.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let _suspended = SuspendedResources::enter();
    with_runtime(move || view().into_view().render_to_string().to_string())
}

/// Same as [`render_to_string`] with an auth snapshot and a mock client in context.
pub fn render_as<F, N>(auth: AuthState, data: MockData, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_context(ApiClient::with_data(data));
        provide_context::<AuthContext>(create_signal(auth));
        view()
    })
}
