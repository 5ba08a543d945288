use crate::api::{ApiClient, ApiError, Event, EventPayload, EventStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct EventsRepository {
    client: Rc<ApiClient>,
}

impl EventsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_my_events(&self) -> Result<Vec<Event>, ApiError> {
        self.client.list_my_events(None).await
    }

    /// Own events that can be offered in a swap.
    pub async fn list_my_swappable_events(&self) -> Result<Vec<Event>, ApiError> {
        self.client
            .list_my_events(Some(EventStatus::Swappable))
            .await
    }

    pub async fn create_event(&self, payload: EventPayload) -> Result<Event, ApiError> {
        self.client.create_event(&payload).await
    }

    pub async fn update_event(&self, id: i64, payload: EventPayload) -> Result<Event, ApiError> {
        self.client.update_event(id, &payload).await
    }

    pub async fn update_event_status(
        &self,
        id: i64,
        status: EventStatus,
    ) -> Result<Event, ApiError> {
        self.client.update_event_status(id, status).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_event(id).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repo(server: &MockServer) -> EventsRepository {
        EventsRepository::new(ApiClient::new_with_base_url(server.base_url()))
    }

    #[tokio::test]
    async fn swappable_listing_filters_by_status() {
        let server = MockServer::start_async().await;
        let filtered = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/events/user")
                    .query_param("status", "SWAPPABLE");
                then.status(200).json_body(json!([{
                    "id": 7,
                    "title": "Focus block",
                    "start_time": "2024-01-02T10:00:00Z",
                    "end_time": "2024-01-02T11:00:00Z",
                    "status": "SWAPPABLE"
                }]));
            })
            .await;

        let events = repo(&server).list_my_swappable_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].status, EventStatus::Swappable);
        filtered.assert_async().await;
    }

    #[tokio::test]
    async fn delete_surfaces_backend_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/api/events/3");
                then.status(409).body("event has a pending swap");
            })
            .await;

        let err = repo(&server).delete_event(3).await.unwrap_err();
        assert_eq!(err.error, "event has a pending swap");
    }
}
