#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Event, EventStatus, Identity};
    use crate::state::auth::AuthState;
    use chrono::{TimeZone, Utc};
    use leptos::*;

    pub fn sample_user() -> Identity {
        Identity {
            id: 1,
            name: "Alice Example".into(),
            email: "alice@example.com".into(),
        }
    }

    pub fn sample_event(id: i64, status: EventStatus) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            start_time: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            status,
            user_id: Some(1),
        }
    }

    pub fn provide_session(
        state: AuthState,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_signed_in() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        provide_session(AuthState::authenticated(sample_user()))
    }
}
