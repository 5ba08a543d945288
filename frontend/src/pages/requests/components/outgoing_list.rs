use crate::{
    api::OutgoingSwapRequest, components::empty_state::EmptyState,
    pages::requests::view_model::RequestAction, utils::time::format_range,
};
use leptos::*;

#[component]
pub fn OutgoingList(
    requests: Vec<OutgoingSwapRequest>,
    on_respond: Callback<(i64, RequestAction)>,
    #[prop(into)] in_flight: Signal<Option<i64>>,
) -> impl IntoView {
    if requests.is_empty() {
        return view! {
            <EmptyState
                title="No outgoing requests"
                description="Request a slot from the marketplace to start a swap."
            />
        }
        .into_view();
    }

    let items = requests
        .into_iter()
        .map(|request| {
            let id = request.id;
            view! {
                <li class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                    <p class="text-sm text-fg">
                        "Waiting on "
                        <span class="font-semibold">{request.responder_name.clone()}</span>
                    </p>
                    <dl class="grid grid-cols-1 gap-2 text-sm sm:grid-cols-2">
                        <div>
                            <dt class="text-fg-muted">"You offer"</dt>
                            <dd class="text-fg">
                                {request.requester_event_title.clone()}
                                <br/>
                                {format_range(&request.requester_event_start_time, &request.requester_event_end_time)}
                            </dd>
                        </div>
                        <div>
                            <dt class="text-fg-muted">"You want"</dt>
                            <dd class="text-fg">
                                {request.responder_event_title.clone()}
                                <br/>
                                {format_range(&request.responder_event_start_time, &request.responder_event_end_time)}
                            </dd>
                        </div>
                    </dl>
                    <button
                        type="button"
                        class="inline-flex items-center rounded-md px-3 py-1.5 text-xs font-semibold border border-border text-fg hover:bg-action-ghost-bg-hover"
                        disabled=move || in_flight.get().is_some()
                        on:click=move |_| on_respond.call((id, RequestAction::Cancel))
                    >
                        {move || if in_flight.get() == Some(id) { "Cancelling..." } else { "Cancel request" }}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="space-y-3">{items}</ul> }.into_view()
}
