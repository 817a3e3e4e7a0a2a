//! Eye button that shows or hides a password input.

use leptos::prelude::*;

#[component]
pub fn VisibilityToggle(#[prop(into)] visible: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="absolute inset-y-0 right-0 flex items-center pr-3 focus:outline-none"
            aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
            on:click=move |_| on_toggle.run(())
        >
            <svg xmlns="http://www.w3.org/2000/svg" width="20px" height="20px" viewBox="0 0 24 24" fill="none">
                <path
                    d="M2.5 12C3.7 8 7.5 5 12 5s8.3 3 9.5 7c-1.2 4-5 7-9.5 7s-8.3-3-9.5-7Z"
                    stroke="#000000"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                <circle cx="12" cy="12" r="3" stroke="#000000" stroke-width="2"/>
                <Show when=move || !visible.get()>
                    <path d="M3 3L21 21" stroke="#000000" stroke-width="2" stroke-linecap="round"/>
                </Show>
            </svg>
        </button>
    }
}
