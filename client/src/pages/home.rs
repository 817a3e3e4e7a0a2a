//! Public landing page.

use leptos::prelude::*;
use signon::ClientConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    view! {
        <div class="flex flex-col items-center justify-center min-h-screen gap-4">
            <h1 class="text-3xl font-bold">"Welcome"</h1>
            <div class="flex gap-4">
                <a class="text-blue-500 hover:underline" href=config.login_path.clone()>"Login"</a>
                <a class="text-blue-500 hover:underline" href=config.register_path.clone()>"Sign Up"</a>
                <a class="text-blue-500 hover:underline" href=config.dashboard_path>"Dashboard"</a>
            </div>
        </div>
    }
}
