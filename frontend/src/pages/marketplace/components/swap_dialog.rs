use crate::{
    api::{ApiError, Event, SwappableSlot},
    components::error::InlineErrorMessage,
    pages::marketplace::view_model::can_offer,
    utils::time::format_range,
};
use leptos::*;

#[component]
pub fn SwapDialog(
    target: RwSignal<Option<SwappableSlot>>,
    #[prop(into)] offers: Signal<Option<Result<Vec<Event>, ApiError>>>,
    offered: RwSignal<Option<i64>>,
    error: RwSignal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let has_offers = move || {
        offers.with(|offers| matches!(offers, Some(Ok(list)) if can_offer(list)))
    };
    let target_summary = move || {
        target
            .get()
            .map(|slot| {
                format!(
                    "{} with {} ({})",
                    slot.title,
                    slot.owner_name,
                    format_range(&slot.start_time, &slot.end_time)
                )
            })
            .unwrap_or_default()
    };

    let offer_list = move || match offers.get() {
        None => view! { <p class="text-sm text-fg-muted">"Loading your events..."</p> }.into_view(),
        Some(Err(err)) => err.into_view(),
        Some(Ok(list)) if list.is_empty() => view! {
            <p class="text-sm text-fg-muted">
                "You have no swappable events. Mark one of your events as swappable on the dashboard first."
            </p>
        }
        .into_view(),
        Some(Ok(list)) => list
            .into_iter()
            .map(|event| {
                let id = event.id;
                view! {
                    <label class="flex items-center gap-3 rounded-md border border-border p-3 cursor-pointer">
                        <input
                            type="radio"
                            name="offered-event"
                            value=id
                            prop:checked=move || offered.get() == Some(id)
                            on:change=move |_| offered.set(Some(id))
                        />
                        <span class="text-sm text-fg">
                            <span class="font-medium">{event.title.clone()}</span>
                            " "
                            <span class="text-fg-muted">{format_range(&event.start_time, &event.end_time)}</span>
                        </span>
                    </label>
                }
            })
            .collect_view(),
    };

    view! {
        <Show when=move || target.get().is_some()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[61] w-full max-w-lg rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-fg">"Request a swap"</h2>
                    <p class="text-sm text-fg-muted">{target_summary}</p>
                    <fieldset class="space-y-2">
                        <legend class="text-sm font-medium text-fg mb-2">"Offer one of your events"</legend>
                        {offer_list}
                    </fieldset>
                    <InlineErrorMessage error=error />
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover disabled:opacity-50"
                            disabled=move || pending.get() || !has_offers()
                            on:click=move |_| on_submit.call(())
                        >
                            {move || if pending.get() { "Sending..." } else { "Send request" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EventStatus;
    use crate::test_support::helpers::sample_event;
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    fn slot() -> SwappableSlot {
        SwappableSlot {
            id: 20,
            title: "Carol's review".into(),
            start_time: Utc.with_ymd_and_hms(2024, 1, 3, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 3, 15, 0, 0).unwrap(),
            owner_name: "Carol".into(),
        }
    }

    fn render(offers: Vec<Event>) -> String {
        render_to_string(move || {
            let offers = create_rw_signal(Some(Ok(offers)));
            view! {
                <SwapDialog
                    target=create_rw_signal(Some(slot()))
                    offers=offers
                    offered=create_rw_signal(None)
                    error=create_rw_signal(None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn dialog_lists_own_swappable_events() {
        let html = render(vec![sample_event(4, EventStatus::Swappable)]);
        assert!(html.contains(" with Carol ("));
        assert!(html.contains("Event 4"));
        assert!(html.contains("type=\"radio\""));
    }

    #[test]
    fn dialog_blocks_request_without_offers() {
        let html = render(Vec::new());
        assert!(html.contains("You have no swappable events"));
        assert!(!html.contains("type=\"radio\""));
    }
}
