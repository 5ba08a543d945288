use crate::{
    components::{
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner, MessageBanner},
    },
    pages::requests::{
        components::{incoming_list::IncomingList, outgoing_list::OutgoingList},
        view_model::{RequestAction, RequestsViewModel},
        RequestsView,
    },
    state::query::{QueryResource, QueryState},
};
use leptos::*;

const TABS: &[(RequestsView, &str)] = &[
    (RequestsView::Both, "All"),
    (RequestsView::Incoming, "Incoming"),
    (RequestsView::Outgoing, "Outgoing"),
];

fn render_query<T, F>(resource: QueryResource<T>, render: F) -> impl Fn() -> View
where
    T: Clone + 'static,
    F: Fn(T) -> View + 'static,
{
    move || match QueryState::from(resource.get()) {
        QueryState::Loading => view! { <LoadingSpinner /> }.into_view(),
        QueryState::Error(err) => view! {
            <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
        }
        .into_view(),
        QueryState::Success(data) => render(data),
    }
}

#[component]
pub fn RequestsPanel(view: RequestsView) -> impl IntoView {
    let vm = RequestsViewModel::new(view);
    let on_respond = Callback::new(move |(id, action): (i64, RequestAction)| {
        vm.respond(id, action);
    });
    let in_flight: Signal<Option<i64>> = vm.in_flight.into();

    let incoming_section = vm.incoming.map(|resource| {
        view! {
            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Incoming"</h2>
                {render_query(resource, move |requests| {
                    view! { <IncomingList requests=requests on_respond=on_respond in_flight=in_flight /> }
                        .into_view()
                })}
            </section>
        }
    });
    let outgoing_section = vm.outgoing.map(|resource| {
        view! {
            <section class="space-y-3">
                <h2 class="text-lg font-semibold text-fg">"Outgoing"</h2>
                {render_query(resource, move |requests| {
                    view! { <OutgoingList requests=requests on_respond=on_respond in_flight=in_flight /> }
                        .into_view()
                })}
            </section>
        }
    });

    let grid_class = if view == RequestsView::Both {
        "grid grid-cols-1 gap-6 lg:grid-cols-2"
    } else {
        "grid grid-cols-1 gap-6"
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Swap requests"</h1>
                    <nav class="mt-3 flex gap-2" aria-label="Request lists">
                        {TABS
                            .iter()
                            .map(|(tab, label)| {
                                let class = if *tab == view {
                                    "px-3 py-1.5 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
                                } else {
                                    "px-3 py-1.5 rounded-md text-sm font-medium text-fg-muted hover:bg-action-ghost-bg-hover"
                                };
                                view! { <a href=tab.path() class=class>{*label}</a> }
                            })
                            .collect_view()}
                    </nav>
                </div>
                <MessageBanner state=vm.message />
                <div class=grid_class>
                    {incoming_section}
                    {outgoing_section}
                </div>
            </div>
        </Layout>
    }
}
