use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::RequireAuth,
    pages::{
        dashboard::DashboardPage,
        home::HomePage,
        login::LoginPage,
        marketplace::MarketplacePage,
        register::RegisterPage,
        requests::{IncomingRequestsPage, OutgoingRequestsPage, RequestsPage},
    },
    state::{auth::AuthProvider, query::QueryCache},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/dashboard",
    "/marketplace",
    "/requests",
    "/requests/incoming",
    "/requests/outgoing",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/marketplace",
    "/requests",
    "/requests/incoming",
    "/requests/outgoing",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(QueryCache::new());
    view! {
        <Title text="SlotSwapper"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/marketplace" view=ProtectedMarketplace/>
                    <Route path="/requests" view=ProtectedRequests/>
                    <Route path="/requests/incoming" view=ProtectedIncomingRequests/>
                    <Route path="/requests/outgoing" view=ProtectedOutgoingRequests/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedMarketplace() -> impl IntoView {
    view! { <RequireAuth><MarketplacePage/></RequireAuth> }
}

#[component]
fn ProtectedRequests() -> impl IntoView {
    view! { <RequireAuth><RequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedIncomingRequests() -> impl IntoView {
    view! { <RequireAuth><IncomingRequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedOutgoingRequests() -> impl IntoView {
    view! { <RequireAuth><OutgoingRequestsPage/></RequireAuth> }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex flex-col items-center justify-center gap-4">
            <h1 class="text-2xl font-bold text-fg">"Page not found"</h1>
            <a href="/" class="text-action-primary-bg hover:underline">"Back to SlotSwapper"</a>
        </div>
    }
}
