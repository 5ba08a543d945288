use crate::{
    components::{
        empty_state::EmptyState,
        error::InlineErrorMessage,
        layout::{Layout, LoadingSpinner, MessageBanner},
    },
    pages::marketplace::{
        components::{slot_card::SlotCard, swap_dialog::SwapDialog},
        view_model::MarketplaceViewModel,
    },
    state::query::QueryState,
};
use leptos::*;

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let vm = MarketplaceViewModel::new();
    let on_request = Callback::new(move |slot| vm.open(slot));

    let slots_view = move || match QueryState::from(vm.slots.get()) {
        QueryState::Loading => view! { <LoadingSpinner /> }.into_view(),
        QueryState::Error(err) => view! {
            <InlineErrorMessage error=Signal::derive(move || Some(err.clone())) />
        }
        .into_view(),
        QueryState::Success(slots) if slots.is_empty() => view! {
            <EmptyState
                title="No swappable slots available"
                description="Check back later when other users mark their events as swappable."
            />
        }
        .into_view(),
        QueryState::Success(slots) => view! {
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3">
                {slots
                    .into_iter()
                    .map(|slot| view! { <SlotCard listing=slot on_request=on_request /> })
                    .collect_view()}
            </div>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">"Marketplace"</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        "Slots other users are willing to trade. Offer one of your swappable events in exchange."
                    </p>
                </div>
                <MessageBanner state=vm.message />
                {slots_view}
            </div>
            <SwapDialog
                target=vm.target
                offers=Signal::derive(move || vm.my_offers.get())
                offered=vm.offered
                error=vm.dialog_error
                pending=vm.request_action.pending()
                on_submit=Callback::new(move |_| {
                    vm.submit();
                })
                on_cancel=Callback::new(move |_| vm.close())
            />
        </Layout>
    }
}
