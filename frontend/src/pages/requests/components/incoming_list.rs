use crate::{
    api::IncomingSwapRequest, components::empty_state::EmptyState,
    pages::requests::view_model::RequestAction, utils::time::format_range,
};
use leptos::*;

#[component]
pub fn IncomingList(
    requests: Vec<IncomingSwapRequest>,
    on_respond: Callback<(i64, RequestAction)>,
    #[prop(into)] in_flight: Signal<Option<i64>>,
) -> impl IntoView {
    if requests.is_empty() {
        return view! {
            <EmptyState
                title="No incoming requests"
                description="When someone wants one of your swappable slots it shows up here."
            />
        }
        .into_view();
    }

    let items = requests
        .into_iter()
        .map(|request| {
            let id = request.id;
            let busy = move || in_flight.get().is_some();
            view! {
                <li class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                    <p class="text-sm text-fg">
                        <span class="font-semibold">{request.requester_name.clone()}</span>
                        " wants your "
                        <span class="font-semibold">{request.responder_event_title.clone()}</span>
                    </p>
                    <dl class="grid grid-cols-1 gap-2 text-sm sm:grid-cols-2">
                        <div>
                            <dt class="text-fg-muted">"They offer"</dt>
                            <dd class="text-fg">
                                {request.requester_event_title.clone()}
                                <br/>
                                {format_range(&request.requester_event_start_time, &request.requester_event_end_time)}
                            </dd>
                        </div>
                        <div>
                            <dt class="text-fg-muted">"Your slot"</dt>
                            <dd class="text-fg">
                                {request.responder_event_title.clone()}
                                <br/>
                                {format_range(&request.responder_event_start_time, &request.responder_event_end_time)}
                            </dd>
                        </div>
                    </dl>
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md px-3 py-1.5 text-xs font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            disabled=busy
                            on:click=move |_| on_respond.call((id, RequestAction::Accept))
                        >
                            {move || if in_flight.get() == Some(id) { "Working..." } else { "Accept" }}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center rounded-md px-3 py-1.5 text-xs font-semibold border border-border text-fg hover:bg-action-ghost-bg-hover"
                            disabled=busy
                            on:click=move |_| on_respond.call((id, RequestAction::Reject))
                        >
                            "Reject"
                        </button>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="space-y-3">{items}</ul> }.into_view()
}
