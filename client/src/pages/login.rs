//! Login / registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page, two modes. The form validates locally and hands over clean
//! `Credentials`; this page posts them through the shared
//! `signon::page::submit_credentials` routine, which stores any returned
//! token in the cookie jar and navigates on success.
//!
//! ERROR HANDLING
//! ==============
//! A failed request leaves the page where it is and shows the server's
//! message (or the generic fallback) above the form. The message survives a
//! mode toggle and is cleared by the next success.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use signon::form::{AuthMode, Credentials};
use signon::page::{submit_credentials, toggle_prompt};
use signon::ClientConfig;

use crate::components::auth_form::AuthForm;
use crate::net::transport::GlooTransport;
use crate::util::cookies::CookieTokenStore;

#[component]
pub fn AuthPage(#[prop(optional)] initial_mode: AuthMode) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let mode = RwSignal::new(initial_mode);
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let submit = Action::new_local(move |credentials: &Credentials| {
        let credentials = credentials.clone();
        let config = config.clone();
        let navigate = navigate.clone();
        let current = mode.get_untracked();
        async move {
            let store = CookieTokenStore::new(&config);
            let go = move |path: &str| navigate(path, NavigateOptions::default());
            submit_credentials(&config, &GlooTransport, &store, &go, current, &credentials).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit.value().get() {
            match result {
                Ok(_) => error.set(None),
                Err(e) => error.set(Some(e.to_string())),
            }
        }
    });

    let on_submit = Callback::new(move |credentials: Credentials| {
        submit.dispatch(credentials);
    });

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="w-full max-w-md p-8 bg-white rounded-lg shadow-md">
                <h2 class="text-2xl font-bold text-center mb-6">{move || mode.get().title()}</h2>

                {move || error.get().map(|message| view! { <p class="text-red-500 mb-2">{message}</p> })}

                <AuthForm mode=mode on_submit=on_submit/>

                <p class="text-center mt-4">
                    {move || toggle_prompt(mode.get()).0}
                    <button
                        type="button"
                        class="text-blue-500 hover:underline"
                        on:click=move |_| mode.update(|m| *m = m.toggled())
                    >
                        {move || toggle_prompt(mode.get()).1}
                    </button>
                </p>
            </div>
        </div>
    }
}

/// `/login` entry point.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! { <AuthPage initial_mode=AuthMode::Login/> }
}

/// `/register` entry point.
#[component]
pub fn RegisterPage() -> impl IntoView {
    view! { <AuthPage initial_mode=AuthMode::Registration/> }
}
