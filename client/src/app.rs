//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use signon::ClientConfig;

use crate::components::require_auth::RequireAuth;
use crate::pages::{
    login::{LoginPage, RegisterPage},
    dashboard::DashboardPage,
    home::HomePage,
};

/// Root application component.
///
/// Provides the build-time [`ClientConfig`] and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::load());

    view! {
        <Stylesheet id="leptos" href="/pkg/signon.css"/>
        <Title text="Sign in"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
