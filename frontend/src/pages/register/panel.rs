use crate::{
    components::{
        error::InlineErrorMessage,
        forms::{field_error, TextField},
    },
    pages::register::view_model::RegisterViewModel,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = RegisterViewModel::new();
    let pending = vm.signup_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Create your account"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "Already registered? "
                        <a href="/login" class="font-medium text-action-primary-bg hover:underline">"Sign in"</a>
                    </p>
                </div>
                <form class="mt-8 space-y-6" novalidate=true on:submit=on_submit>
                    <div class="space-y-4">
                        <TextField
                            id="name"
                            label="Name"
                            autocomplete="name"
                            value=vm.name
                            error=field_error(vm.field_errors, "name")
                        />
                        <TextField
                            id="email"
                            label="Email"
                            input_type="email"
                            autocomplete="email"
                            value=vm.email
                            error=field_error(vm.field_errors, "email")
                        />
                        <TextField
                            id="password"
                            label="Password"
                            input_type="password"
                            autocomplete="new-password"
                            value=vm.password
                            error=field_error(vm.field_errors, "password")
                        />
                    </div>
                    <InlineErrorMessage error=vm.error />
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn register_panel_renders_all_fields() {
        let html = render_to_string(move || view! { <RegisterPanel /> });
        assert!(html.contains("id=\"name\""));
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("Create account"));
    }
}
