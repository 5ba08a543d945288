use crate::api::{ApiClient, ApiError, Event, SwapRequestRecord, SwappableSlot};
use crate::pages::{
    dashboard::repository::EventsRepository, marketplace::repository::MarketplaceRepository,
};
use crate::state::query::{use_mutation, use_query, Mutation, QueryKey, QueryResource};
use crate::utils::message::MessageState;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapProposal {
    pub offered_event_id: i64,
    pub target_slot_id: i64,
}

pub fn can_offer(offers: &[Event]) -> bool {
    !offers.is_empty()
}

#[derive(Clone, Copy)]
pub struct MarketplaceViewModel {
    pub slots: QueryResource<Vec<SwappableSlot>>,
    pub my_offers: QueryResource<Vec<Event>>,
    pub target: RwSignal<Option<SwappableSlot>>,
    pub offered: RwSignal<Option<i64>>,
    pub dialog_error: RwSignal<Option<ApiError>>,
    pub message: RwSignal<MessageState>,
    pub request_action: Action<SwapProposal, Result<SwapRequestRecord, ApiError>>,
}

impl MarketplaceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(MarketplaceRepository::new(api.clone()));
        let events = store_value(EventsRepository::new(api));

        let slots = use_query(QueryKey::SwappableSlots, move || {
            let repo = repository.get_value();
            async move { repo.list_slots().await }
        });
        let my_offers = use_query(QueryKey::MySwappableEvents, move || {
            let repo = events.get_value();
            async move { repo.list_my_swappable_events().await }
        });

        let request_action =
            use_mutation(Mutation::CreateSwapRequest, move |proposal: &SwapProposal| {
                let repo = repository.get_value();
                let proposal = *proposal;
                async move {
                    repo.request_swap(proposal.offered_event_id, proposal.target_slot_id)
                        .await
                }
            });

        let target = create_rw_signal(None::<SwappableSlot>);
        let offered = create_rw_signal(None::<i64>);
        let dialog_error = create_rw_signal(None::<ApiError>);
        let message = create_rw_signal(MessageState::default());

        create_effect(move |_| match request_action.value().get() {
            Some(Ok(_)) => {
                let title = target
                    .get_untracked()
                    .map(|slot| slot.title)
                    .unwrap_or_default();
                target.set(None);
                offered.set(None);
                dialog_error.set(None);
                message.update(|msg| msg.set_success(format!("Swap requested for \"{}\".", title)));
            }
            Some(Err(err)) => dialog_error.set(Some(err)),
            None => {}
        });

        Self {
            slots,
            my_offers,
            target,
            offered,
            dialog_error,
            message,
            request_action,
        }
    }

    pub fn open(&self, slot: SwappableSlot) {
        self.offered.set(None);
        self.dialog_error.set(None);
        self.target.set(Some(slot));
    }

    pub fn close(&self) {
        self.target.set(None);
        self.offered.set(None);
        self.dialog_error.set(None);
    }

    pub fn proposal(&self) -> Result<SwapProposal, ApiError> {
        let target = self
            .target
            .get_untracked()
            .ok_or_else(|| ApiError::validation("Choose a slot to request"))?;
        let offered = self
            .offered
            .get_untracked()
            .ok_or_else(|| ApiError::validation("Choose one of your swappable events to offer"))?;
        Ok(SwapProposal {
            offered_event_id: offered,
            target_slot_id: target.id,
        })
    }

    pub fn submit(&self) -> bool {
        if self.request_action.pending().get_untracked() {
            return false;
        }
        match self.proposal() {
            Ok(proposal) => {
                self.dialog_error.set(None);
                self.request_action.dispatch(proposal);
                true
            }
            Err(err) => {
                self.dialog_error.set(Some(err));
                false
            }
        }
    }
}

impl Default for MarketplaceViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EventStatus;
    use crate::test_support::helpers::sample_event;
    use crate::test_support::ssr::with_idle_resources;
    use chrono::{TimeZone, Utc};

    fn slot(id: i64) -> SwappableSlot {
        SwappableSlot {
            id,
            title: "Carol's review".into(),
            start_time: Utc.with_ymd_and_hms(2024, 1, 3, 14, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 1, 3, 15, 0, 0).unwrap(),
            owner_name: "Carol".into(),
        }
    }

    #[test]
    fn offering_requires_a_swappable_event() {
        assert!(!can_offer(&[]));
        assert!(can_offer(&[sample_event(1, EventStatus::Swappable)]));
    }

    #[test]
    fn submit_without_offer_reports_error() {
        with_idle_resources(|| {
            let vm = MarketplaceViewModel::new();
            vm.open(slot(20));
            assert!(!vm.submit());
            assert_eq!(vm.request_action.version().get_untracked(), 0);
            let err = vm.dialog_error.get().unwrap();
            assert_eq!(err.code, "VALIDATION_ERROR");
        });
    }

    #[test]
    fn proposal_pairs_offer_with_target() {
        with_idle_resources(|| {
            let vm = MarketplaceViewModel::new();
            vm.open(slot(20));
            vm.offered.set(Some(4));
            assert_eq!(
                vm.proposal().unwrap(),
                SwapProposal {
                    offered_event_id: 4,
                    target_slot_id: 20
                }
            );
            vm.close();
            assert!(vm.target.get().is_none());
            assert!(vm.proposal().is_err());
        });
    }
}
