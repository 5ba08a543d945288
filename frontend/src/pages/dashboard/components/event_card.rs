use crate::api::{Event, EventStatus};
use crate::utils::time::format_range;
use leptos::*;

pub fn status_badge_class(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Busy => "bg-surface-muted text-fg",
        EventStatus::Swappable => "bg-status-success-bg text-status-success-text",
        EventStatus::SwapPending => "bg-status-warning-bg text-status-warning-text",
    }
}

fn toggle_label(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Busy => "Make swappable",
        EventStatus::Swappable => "Mark busy",
        EventStatus::SwapPending => "Swap pending",
    }
}

#[component]
pub fn EventCard(
    event: Event,
    on_edit: Callback<Event>,
    on_toggle: Callback<Event>,
    on_delete: Callback<Event>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let locked = event.status.is_locked();
    let range = format_range(&event.start_time, &event.end_time);
    let status = event.status;
    let event = store_value(event);
    let button_class = if locked {
        "inline-flex items-center rounded-md px-3 py-1.5 text-xs font-semibold border border-border text-fg-muted opacity-50 cursor-not-allowed"
    } else {
        "inline-flex items-center rounded-md px-3 py-1.5 text-xs font-semibold border border-border text-fg hover:bg-action-ghost-bg-hover"
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3" data-event-id=event.with_value(|e| e.id)>
            <div class="flex items-start justify-between gap-2">
                <h3 class="text-base font-semibold text-fg">{event.with_value(|e| e.title.clone())}</h3>
                <span class=format!("text-xs font-medium rounded-full px-2 py-0.5 {}", status_badge_class(status))>
                    {status.label()}
                </span>
            </div>
            <p class="text-sm text-fg-muted">{range}</p>
            <div class="flex flex-wrap gap-2">
                <button
                    type="button"
                    class=button_class
                    disabled=move || locked || busy.get()
                    on:click=move |_| on_toggle.call(event.get_value())
                >
                    {toggle_label(status)}
                </button>
                <button
                    type="button"
                    class=button_class
                    disabled=locked
                    on:click=move |_| on_edit.call(event.get_value())
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class=button_class
                    disabled=locked
                    on:click=move |_| on_delete.call(event.get_value())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_event;
    use crate::test_support::ssr::render_to_string;

    fn render(status: EventStatus) -> String {
        render_to_string(move || {
            view! {
                <EventCard
                    event=sample_event(3, status)
                    on_edit=Callback::new(|_| {})
                    on_toggle=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                    busy=Signal::derive(|| false)
                />
            }
        })
    }

    #[test]
    fn busy_event_offers_swappable_toggle() {
        let html = render(EventStatus::Busy);
        assert!(html.contains("Event 3"));
        assert!(html.contains("Make swappable"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn swap_pending_event_disables_every_action() {
        let html = render(EventStatus::SwapPending);
        assert!(html.contains("Swap pending"));
        assert_eq!(html.matches("disabled").count(), 3);
    }
}
