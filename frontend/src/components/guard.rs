use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_auth, SessionPhase},
    utils::redirect,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let phase = create_memo(move |_| auth.get().phase);
    create_effect(move |_| {
        if phase.get() != SessionPhase::Anonymous {
            return;
        }
        let target = redirect::current_location_target()
            .unwrap_or_else(|| redirect::DEFAULT_AFTER_LOGIN.to_string());
        redirect::navigate_to(&redirect::login_redirect_href(&target));
    });
    view! {
        <Show
            when=move || should_render_children(phase.get())
            fallback=move || {
                if phase.get() == SessionPhase::Unknown {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(phase: SessionPhase) -> bool {
    phase == SessionPhase::Authenticated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(SessionPhase::Unknown));
        assert!(!should_render_children(SessionPhase::Anonymous));
        assert!(should_render_children(SessionPhase::Authenticated));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAuth;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{provide_session, sample_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn render_guarded(state: AuthState) -> String {
        render_to_string(move || {
            provide_session(state);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        })
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_guarded(AuthState::authenticated(sample_user()));
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_anonymous() {
        let html = render_guarded(AuthState::anonymous());
        assert!(!html.contains("protected-content"));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_probing() {
        let html = render_guarded(AuthState::default());
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("protected-content"));
    }
}
