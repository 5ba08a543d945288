use crate::utils::redirect::redirect_param;
use leptos::*;
use leptos_router::use_query_map;

pub mod components;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let redirect = Signal::derive(move || query.with(redirect_param));
    view! { <LoginPanel redirect=redirect /> }
}
