use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::layout::CustomerLayout,
    pages::{CustomerAttendancePage, CustomerDashboardPage, HomePage, SignInPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/signin",
    "/login",
    "/customer",
    "/customer/attendance",
];

/// Paths that render [`SignInPage`]; the configured sign-in path must be one of them.
pub const SIGN_IN_ROUTE_PATHS: &[&str] = &["/signin", "/login"];

/// Routes rendered inside [`CustomerShell`] and therefore behind the customer gate.
pub const CUSTOMER_ROUTE_PATHS: &[&str] = &["/customer", "/customer/attendance"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/signin", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    view! {
        <Title text="Gym Portal"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/signin" view=SignInPage/>
                    <Route path="/login" view=SignInPage/>
                    <Route path="/customer" view=CustomerShell>
                        <Route path="" view=CustomerDashboardPage/>
                        <Route path="attendance" view=CustomerAttendancePage/>
                    </Route>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn CustomerShell() -> impl IntoView {
    view! { <CustomerLayout><Outlet/></CustomerLayout> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::layout::CUSTOMER_NAV;
    use std::collections::HashSet;

    #[test]
    fn sign_in_route_matches_default_config() {
        assert!(ROUTE_PATHS.contains(&crate::config::DEFAULT_SIGN_IN_PATH));
    }

    #[test]
    fn sign_in_aliases_are_public_routes() {
        for path in SIGN_IN_ROUTE_PATHS {
            assert!(PUBLIC_ROUTE_PATHS.contains(path), "{} is not public", path);
        }
    }

    #[test]
    fn customer_and_public_routes_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let customer: HashSet<&str> = CUSTOMER_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(customer.is_disjoint(&public));
        let union: HashSet<&str> = customer.union(&public).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn sidebar_links_point_at_customer_routes() {
        for (href, label) in CUSTOMER_NAV {
            assert!(
                CUSTOMER_ROUTE_PATHS.contains(href),
                "nav entry {} points outside the customer shell: {}",
                label,
                href
            );
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
