use crate::{
    state::auth::{self, use_auth},
    utils::{message::MessageState, redirect},
};
use leptos::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/marketplace", "Marketplace"),
    ("/requests", "Requests"),
];

const NAV_LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let (menu_open, set_menu_open) = create_signal(false);
    let user_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            redirect::navigate_to(redirect::LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/dashboard" class="text-xl font-semibold text-fg">"SlotSwapper"</a>
                    <div class="flex items-center gap-2">
                        <nav class="hidden md:flex items-center space-x-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! { <a href=*href class=NAV_LINK_CLASS>{*label}</a> })
                                .collect_view()}
                            <span class="text-sm text-fg-muted px-3">{user_name}</span>
                            <button
                                on:click=on_logout
                                class=format!("{} disabled:opacity-50", NAV_LINK_CLASS)
                                disabled=move || logout_pending.get()
                            >
                                "Logout"
                            </button>
                        </nav>
                        <button
                            type="button"
                            class="md:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get().to_string()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav id="mobile-nav" class="md:hidden border-t border-border px-4 py-3 space-y-2">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a
                                    href=*href
                                    class=format!("block {}", NAV_LINK_CLASS)
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                        <button
                            on:click=on_logout
                            class=format!("w-full text-left {} disabled:opacity-50", NAV_LINK_CLASS)
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </nav>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            <span class="sr-only">"Loading"</span>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4" role="alert">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Renders whichever half of a [`MessageState`] is set.
#[component]
pub fn MessageBanner(#[prop(into)] state: Signal<MessageState>) -> impl IntoView {
    move || {
        let current = state.get();
        match (current.success, current.error) {
            (_, Some(err)) => view! { <ErrorMessage message=err.error/> }.into_view(),
            (Some(msg), None) => view! { <SuccessMessage message=msg/> }.into_view(),
            (None, None) => ().into_view(),
        }
    }
}
