use crate::api::{
    ApiClient, ApiError, IncomingSwapRequest, OutgoingSwapRequest, SwapDecision,
    SwapRequestRecord,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct SwapRequestsRepository {
    client: Rc<ApiClient>,
}

impl SwapRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_incoming(&self) -> Result<Vec<IncomingSwapRequest>, ApiError> {
        self.client.list_incoming_swap_requests().await
    }

    pub async fn list_outgoing(&self) -> Result<Vec<OutgoingSwapRequest>, ApiError> {
        self.client.list_outgoing_swap_requests().await
    }

    pub async fn respond(
        &self,
        id: i64,
        decision: SwapDecision,
    ) -> Result<SwapRequestRecord, ApiError> {
        self.client.respond_to_swap_request(id, decision).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::SwapRequestStatus;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn rejecting_posts_rejected_status() {
        let server = MockServer::start_async().await;
        let rejected = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/swap-response/12")
                    .json_body(json!({ "status": "REJECTED" }));
                then.status(200).json_body(json!({
                    "id": 12,
                    "requester_slot_id": 1,
                    "responder_slot_id": 2,
                    "status": "REJECTED"
                }));
            })
            .await;

        let repo = SwapRequestsRepository::new(ApiClient::new_with_base_url(server.base_url()));
        let record = repo.respond(12, SwapDecision::Rejected).await.unwrap();
        assert_eq!(record.status, SwapRequestStatus::Rejected);
        rejected.assert_async().await;
    }
}
