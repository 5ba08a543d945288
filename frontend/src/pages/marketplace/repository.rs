use crate::api::{ApiClient, ApiError, CreateSwapRequest, SwapRequestRecord, SwappableSlot};
use std::rc::Rc;

#[derive(Clone)]
pub struct MarketplaceRepository {
    client: Rc<ApiClient>,
}

impl MarketplaceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_slots(&self) -> Result<Vec<SwappableSlot>, ApiError> {
        self.client.list_swappable_slots().await
    }

    pub async fn request_swap(
        &self,
        my_slot_id: i64,
        their_slot_id: i64,
    ) -> Result<SwapRequestRecord, ApiError> {
        self.client
            .create_swap_request(CreateSwapRequest {
                requester_slot_id: my_slot_id,
                responder_slot_id: their_slot_id,
            })
            .await
    }
}
