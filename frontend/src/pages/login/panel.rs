use crate::pages::login::{components::form::LoginForm, view_model::LoginViewModel};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel(#[prop(into)] redirect: Signal<String>) -> impl IntoView {
    let vm = LoginViewModel::new(redirect);
    let pending = vm.login_action.pending();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to SlotSwapper"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        "No account yet? "
                        <a href="/register" class="font-medium text-action-primary-bg hover:underline">"Create one"</a>
                    </p>
                </div>
                <LoginForm
                    email=vm.email
                    password=vm.password
                    field_errors=vm.field_errors
                    error=vm.error
                    pending=pending.into()
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
