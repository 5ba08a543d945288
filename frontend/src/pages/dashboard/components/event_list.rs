use crate::{
    api::{ApiError, Event},
    components::{empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner},
    pages::dashboard::components::event_card::EventCard,
    state::query::QueryState,
};
use leptos::*;

#[component]
pub fn EventList(
    state: QueryState<Vec<Event>>,
    on_edit: Callback<Event>,
    on_toggle: Callback<Event>,
    on_delete: Callback<Event>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    match state {
        QueryState::Loading => view! { <LoadingSpinner /> }.into_view(),
        QueryState::Error(err) => {
            let error: Option<ApiError> = Some(err);
            view! { <InlineErrorMessage error=Signal::derive(move || error.clone()) /> }.into_view()
        }
        QueryState::Success(events) if events.is_empty() => view! {
            <EmptyState
                title="No events yet"
                description="Create an event, then mark it swappable to offer it on the marketplace."
            />
        }
        .into_view(),
        QueryState::Success(events) => view! {
            <div class="event-grid grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                {events
                    .into_iter()
                    .map(|event| view! {
                        <EventCard
                            event=event
                            on_edit=on_edit
                            on_toggle=on_toggle
                            on_delete=on_delete
                            busy=busy
                        />
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}
