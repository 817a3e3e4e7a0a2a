//! Authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RequireAuth`, so rendering implies a token was present.
//! Logging out clears the cookie and returns to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use signon::ClientConfig;
use signon::session::logout;

use crate::util::cookies::CookieTokenStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let store = CookieTokenStore::new(&config);
        let go = |path: &str| navigate(path, NavigateOptions::default());
        logout(&store, &go, &config.login_path);
    };

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>
            <p>"You are signed in."</p>
            <button
                type="button"
                class="bg-blue-500 hover:bg-blue-600 text-white py-2 px-4 rounded-md"
                on:click=on_logout
            >
                "Logout"
            </button>
        </div>
    }
}
