use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{field_error, TextField},
    },
    utils::validation::FieldErrors,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    email: RwSignal<String>,
    password: RwSignal<String>,
    field_errors: RwSignal<FieldErrors>,
    error: RwSignal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <form class="mt-8 space-y-6" novalidate=true on:submit=move |ev| on_submit.call(ev)>
            <div class="space-y-4">
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    error=field_error(field_errors, "email")
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    error=field_error(field_errors, "password")
                />
            </div>

            <InlineErrorMessage error=error />

            <button
                type="submit"
                disabled=move || pending.get()
                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
            >
                {move || if pending.get() { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
