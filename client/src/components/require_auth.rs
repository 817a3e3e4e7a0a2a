//! Route guard for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! UX-only: the check is token presence in the cookie store. Real access
//! control must live on the API.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use signon::ClientConfig;
use signon::session::{GuardDecision, check_session};

use crate::util::cookies::CookieTokenStore;

/// Render `children` only when a session token is present; otherwise
/// redirect to the login page and render nothing.
#[component]
pub fn RequireAuth(children: Children) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let store = CookieTokenStore::new(&config);

    match check_session(&store, &config.login_path) {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => {
            let navigate = use_navigate();
            Effect::new(move |_| {
                tracing::debug!(%path, "no session token, redirecting");
                navigate(&path, NavigateOptions::default());
            });
            view! { <></> }.into_any()
        }
    }
}
