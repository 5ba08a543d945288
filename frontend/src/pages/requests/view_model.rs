use crate::api::{
    ApiClient, ApiError, IncomingSwapRequest, OutgoingSwapRequest, SwapDecision,
    SwapRequestRecord,
};
use crate::pages::requests::{repository::SwapRequestsRepository, RequestsView};
use crate::state::query::{use_mutation, use_query, Mutation, QueryKey, QueryResource};
use crate::utils::message::MessageState;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Reject,
    /// Withdraw an outgoing request; the backend treats this as a rejection.
    Cancel,
}

impl RequestAction {
    pub fn decision(&self) -> SwapDecision {
        match self {
            RequestAction::Accept => SwapDecision::Accepted,
            RequestAction::Reject | RequestAction::Cancel => SwapDecision::Rejected,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            RequestAction::Accept => "Swap accepted. Both calendars have been updated.",
            RequestAction::Reject => "Swap request rejected.",
            RequestAction::Cancel => "Swap request cancelled.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestResponse {
    pub id: i64,
    pub action: RequestAction,
}

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub view: RequestsView,
    pub incoming: Option<QueryResource<Vec<IncomingSwapRequest>>>,
    pub outgoing: Option<QueryResource<Vec<OutgoingSwapRequest>>>,
    pub message: RwSignal<MessageState>,
    pub in_flight: RwSignal<Option<i64>>,
    last_action: RwSignal<Option<RequestAction>>,
    pub respond_action: Action<RequestResponse, Result<SwapRequestRecord, ApiError>>,
}

fn apply_response_result(
    result: Option<Result<SwapRequestRecord, ApiError>>,
    action: Option<RequestAction>,
    message: RwSignal<MessageState>,
    in_flight: RwSignal<Option<i64>>,
) {
    let Some(result) = result else {
        return;
    };
    in_flight.set(None);
    match result {
        Ok(_) => {
            let text = action
                .map(|action| action.success_message())
                .unwrap_or("Swap request updated.");
            message.update(|msg| msg.set_success(text));
        }
        Err(err) => message.update(|msg| msg.set_error(err)),
    }
}

impl RequestsViewModel {
    pub fn new(view: RequestsView) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(SwapRequestsRepository::new(api));

        let incoming = view.shows_incoming().then(|| {
            use_query(QueryKey::IncomingRequests, move || {
                let repo = repository.get_value();
                async move { repo.list_incoming().await }
            })
        });
        let outgoing = view.shows_outgoing().then(|| {
            use_query(QueryKey::OutgoingRequests, move || {
                let repo = repository.get_value();
                async move { repo.list_outgoing().await }
            })
        });

        let respond_action = use_mutation(
            Mutation::RespondToSwapRequest,
            move |response: &RequestResponse| {
                let repo = repository.get_value();
                let response = *response;
                async move { repo.respond(response.id, response.action.decision()).await }
            },
        );

        let message = create_rw_signal(MessageState::default());
        let in_flight = create_rw_signal(None::<i64>);
        let last_action = create_rw_signal(None::<RequestAction>);

        create_effect(move |_| {
            apply_response_result(
                respond_action.value().get(),
                last_action.get_untracked(),
                message,
                in_flight,
            );
        });

        Self {
            view,
            incoming,
            outgoing,
            message,
            in_flight,
            last_action,
            respond_action,
        }
    }

    pub fn respond(&self, id: i64, action: RequestAction) -> bool {
        if self.in_flight.get_untracked().is_some() {
            return false;
        }
        self.in_flight.set(Some(id));
        self.last_action.set(Some(action));
        self.message.update(|msg| msg.clear());
        self.respond_action.dispatch(RequestResponse { id, action });
        true
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::SwapRequestStatus;
    use crate::test_support::ssr::{with_idle_resources, with_runtime};

    fn record(status: SwapRequestStatus) -> SwapRequestRecord {
        SwapRequestRecord {
            id: 9,
            requester_user_id: Some(2),
            responder_user_id: Some(1),
            requester_slot_id: 10,
            responder_slot_id: 20,
            status,
            created_at: None,
        }
    }

    #[test]
    fn cancel_is_sent_as_rejection() {
        assert_eq!(RequestAction::Cancel.decision(), SwapDecision::Rejected);
        assert_eq!(RequestAction::Reject.decision(), SwapDecision::Rejected);
        assert_eq!(RequestAction::Accept.decision(), SwapDecision::Accepted);
    }

    #[test]
    fn split_routes_only_query_their_list() {
        with_idle_resources(|| {
            let incoming = RequestsViewModel::new(RequestsView::Incoming);
            assert!(incoming.incoming.is_some());
            assert!(incoming.outgoing.is_none());

            let both = RequestsViewModel::new(RequestsView::Both);
            assert!(both.incoming.is_some() && both.outgoing.is_some());
        });
    }

    #[test]
    fn response_result_updates_message_and_clears_in_flight() {
        with_runtime(|| {
            let message = create_rw_signal(MessageState::default());
            let in_flight = create_rw_signal(Some(9));

            apply_response_result(
                Some(Ok(record(SwapRequestStatus::Accepted))),
                Some(RequestAction::Accept),
                message,
                in_flight,
            );
            assert!(in_flight.get().is_none());
            assert_eq!(
                message.get().success.as_deref(),
                Some(RequestAction::Accept.success_message())
            );

            in_flight.set(Some(9));
            apply_response_result(
                Some(Err(ApiError::http(409, "slot no longer available"))),
                Some(RequestAction::Accept),
                message,
                in_flight,
            );
            assert!(in_flight.get().is_none());
            assert_eq!(
                message.get().error.map(|e| e.error),
                Some("slot no longer available".into())
            );
        });
    }
}
