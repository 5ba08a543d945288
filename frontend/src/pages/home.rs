use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_auth, SessionPhase},
    utils::redirect,
};
use leptos::*;

/// Where `/` sends a visitor once the session check settles.
pub fn landing_target(phase: SessionPhase) -> Option<String> {
    match phase {
        SessionPhase::Unknown => None,
        SessionPhase::Authenticated => Some(redirect::DEFAULT_AFTER_LOGIN.to_string()),
        SessionPhase::Anonymous => Some(redirect::login_redirect_href(
            redirect::DEFAULT_AFTER_LOGIN,
        )),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    create_effect(move |_| {
        if let Some(target) = landing_target(auth.get().phase) {
            redirect::navigate_to(&target);
        }
    });
    view! {
        <div class="min-h-screen bg-surface">
            <LoadingSpinner />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_waits_for_session_check() {
        assert_eq!(landing_target(SessionPhase::Unknown), None);
        assert_eq!(
            landing_target(SessionPhase::Authenticated).as_deref(),
            Some("/dashboard")
        );
        assert_eq!(
            landing_target(SessionPhase::Anonymous).as_deref(),
            Some("/login?redirect=/dashboard")
        );
    }
}
