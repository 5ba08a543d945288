use crate::api::SwappableSlot;
use crate::utils::time::format_range;
use leptos::*;

#[component]
pub fn SlotCard(listing: SwappableSlot, on_request: Callback<SwappableSlot>) -> impl IntoView {
    let range = format_range(&listing.start_time, &listing.end_time);
    let title = listing.title.clone();
    let owner = listing.owner_name.clone();
    let listing = store_value(listing);

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
            <h3 class="text-base font-semibold text-fg">{title}</h3>
            <p class="text-sm text-fg-muted">{range}</p>
            <p class="text-sm text-fg">"Offered by " <span class="font-medium">{owner}</span></p>
            <button
                type="button"
                class="inline-flex items-center rounded-md px-3 py-1.5 text-xs font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                on:click=move |_| on_request.call(listing.get_value())
            >
                "Request swap"
            </button>
        </div>
    }
}
