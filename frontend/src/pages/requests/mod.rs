use leptos::*;

pub mod components;
pub mod panel;
pub mod repository;
pub mod view_model;

pub use panel::RequestsPanel;

/// Which swap-request lists a route shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestsView {
    Both,
    Incoming,
    Outgoing,
}

impl RequestsView {
    pub fn shows_incoming(&self) -> bool {
        matches!(self, RequestsView::Both | RequestsView::Incoming)
    }

    pub fn shows_outgoing(&self) -> bool {
        matches!(self, RequestsView::Both | RequestsView::Outgoing)
    }

    pub fn path(&self) -> &'static str {
        match self {
            RequestsView::Both => "/requests",
            RequestsView::Incoming => "/requests/incoming",
            RequestsView::Outgoing => "/requests/outgoing",
        }
    }
}

#[component]
pub fn RequestsPage() -> impl IntoView {
    view! { <RequestsPanel view=RequestsView::Both /> }
}

#[component]
pub fn IncomingRequestsPage() -> impl IntoView {
    view! { <RequestsPanel view=RequestsView::Incoming /> }
}

#[component]
pub fn OutgoingRequestsPage() -> impl IntoView {
    view! { <RequestsPanel view=RequestsView::Outgoing /> }
}
