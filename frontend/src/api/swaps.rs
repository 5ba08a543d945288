use super::{
    client::ApiClient,
    types::{
        ApiError, CreateSwapRequest, IncomingSwapRequest, OutgoingSwapRequest, SwapDecision,
        SwapRequestRecord, SwapResponseRequest, SwappableSlot,
    },
};

impl ApiClient {
    pub async fn list_swappable_slots(&self) -> Result<Vec<SwappableSlot>, ApiError> {
        let url = self.endpoint("/api/swappable-slots").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_swap_request(
        &self,
        payload: CreateSwapRequest,
    ) -> Result<SwapRequestRecord, ApiError> {
        let url = self.endpoint("/api/swap-request").await;
        let response = self
            .send(self.http_client().post(url).json(&payload))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_incoming_swap_requests(&self) -> Result<Vec<IncomingSwapRequest>, ApiError> {
        let url = self.endpoint("/api/swap-requests/incoming").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn list_outgoing_swap_requests(&self) -> Result<Vec<OutgoingSwapRequest>, ApiError> {
        let url = self.endpoint("/api/swap-requests/outgoing").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn respond_to_swap_request(
        &self,
        id: i64,
        decision: SwapDecision,
    ) -> Result<SwapRequestRecord, ApiError> {
        let url = self.endpoint(&format!("/api/swap-response/{}", id)).await;
        let response = self
            .send(
                self.http_client()
                    .post(url)
                    .json(&SwapResponseRequest { status: decision }),
            )
            .await?;
        self.map_json_response(response).await
    }
}
