//! Login / registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns an `AuthFormState` signal. Every keystroke and blur goes through the
//! core state so validation, error visibility, and strength scoring behave
//! the same as in native tests. A clean submit hands `Credentials` to the
//! page through `on_submit`; a dirty one stops here.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use signon::form::{AuthFormState, AuthMode, Credentials, Field};

use crate::components::visibility_toggle::VisibilityToggle;

const INPUT_CLASS: &str = "w-full p-2 border rounded-md";

#[component]
pub fn AuthForm(#[prop(into)] mode: Signal<AuthMode>, on_submit: Callback<Credentials>) -> impl IntoView {
    let form = RwSignal::new(AuthFormState::new());

    // Rule set depends on mode; refresh errors when the page toggles.
    Effect::new(move |_| {
        let current = mode.get();
        form.update(|f| f.revalidate(current));
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = mode.get_untracked();
        if let Some(Ok(credentials)) = form.try_update(|f| f.submit(current)) {
            on_submit.run(credentials);
        }
    };

    let registering = move || !mode.get().is_login();

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <Show when=registering>
                <TextInput field=Field::Name form=form mode=mode/>
                <FieldError field=Field::Name form=form/>
            </Show>

            <TextInput field=Field::Email form=form mode=mode/>
            <FieldError field=Field::Email form=form/>

            <div class="relative">
                <TextInput field=Field::Password form=form mode=mode/>
                <VisibilityToggle
                    visible=Signal::derive(move || form.with(AuthFormState::password_visible))
                    on_toggle=Callback::new(move |()| form.update(AuthFormState::toggle_password_visibility))
                />
            </div>

            {move || {
                form.with(|f| f.strength_indicator(mode.get()))
                    .map(|level| {
                        view! {
                            <p class=format!("password-strength {}", level.class())>{level.label()}</p>
                        }
                    })
            }}
            <FieldError field=Field::Password form=form/>

            <Show when=registering>
                <div class="relative">
                    <TextInput field=Field::ConfirmPassword form=form mode=mode/>
                    <VisibilityToggle
                        visible=Signal::derive(move || form.with(AuthFormState::confirm_password_visible))
                        on_toggle=Callback::new(move |()| {
                            form.update(AuthFormState::toggle_confirm_password_visibility);
                        })
                    />
                </div>
                <FieldError field=Field::ConfirmPassword form=form/>
            </Show>

            <div>
                <input
                    type="checkbox"
                    name="rememberMe"
                    id="rememberMe"
                    class="mr-2"
                    prop:checked=move || form.with(|f| f.values().remember_me)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| f.set_remember_me(checked));
                    }
                />
                <label for="rememberMe">"Remember Me"</label>
            </div>

            <button type="submit" class="w-full bg-blue-500 hover:bg-blue-600 text-white py-2 rounded-md">
                {move || mode.get().title()}
            </button>
        </form>
    }
}

/// One text-like input bound to a form field.
#[component]
fn TextInput(field: Field, form: RwSignal<AuthFormState>, #[prop(into)] mode: Signal<AuthMode>) -> impl IntoView {
    let class = move || {
        let accent = match field {
            Field::Password => form.with(|f| f.password_class(mode.get())),
            _ => "",
        };
        if accent.is_empty() {
            format!("{INPUT_CLASS} border-gray-300")
        } else {
            format!("{INPUT_CLASS} focus:outline-none {accent}")
        }
    };

    view! {
        <input
            type=move || form.with(|f| f.input_type(field))
            name=field.name()
            placeholder=field.placeholder()
            class=class
            prop:value=move || form.with(|f| f.values().get(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                let current = mode.get_untracked();
                form.update(|f| f.set_field(field, value, current));
            }
            on:blur=move |_| {
                let current = mode.get_untracked();
                form.update(|f| f.blur(field, current));
            }
        />
    }
}

/// Validation message shown under a touched field.
#[component]
fn FieldError(field: Field, form: RwSignal<AuthFormState>) -> impl IntoView {
    move || {
        form.with(|f| f.error_for(field))
            .map(|message| view! { <p class="text-red-500 mb-2">{message}</p> })
    }
}
