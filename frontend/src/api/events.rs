use super::{
    client::ApiClient,
    types::{ApiError, Event, EventPayload, EventStatus, EventStatusRequest},
};

impl ApiClient {
    pub async fn list_my_events(&self, status: Option<EventStatus>) -> Result<Vec<Event>, ApiError> {
        let url = self.endpoint("/api/events/user").await;
        let mut request = self.http_client().get(url);
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        let response = self.send(request).await?;
        self.map_json_response(response).await
    }

    pub async fn create_event(&self, payload: &EventPayload) -> Result<Event, ApiError> {
        let url = self.endpoint("/api/events").await;
        let response = self
            .send(self.http_client().post(url).json(payload))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_event(&self, id: i64, payload: &EventPayload) -> Result<Event, ApiError> {
        let url = self.endpoint(&format!("/api/events/{}", id)).await;
        let response = self
            .send(self.http_client().put(url).json(payload))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn update_event_status(
        &self,
        id: i64,
        status: EventStatus,
    ) -> Result<Event, ApiError> {
        let url = self.endpoint(&format!("/api/events/{}/status", id)).await;
        let response = self
            .send(
                self.http_client()
                    .post(url)
                    .json(&EventStatusRequest { status }),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/api/events/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }
}
