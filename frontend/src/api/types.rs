use chrono::{DateTime, Utc};
use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// `/api/me` has been served both wrapped and bare.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum MeResponse {
    Wrapped { user: Identity },
    Bare(Identity),
}

impl From<MeResponse> for Identity {
    fn from(value: MeResponse) -> Self {
        match value {
            MeResponse::Wrapped { user } => user,
            MeResponse::Bare(user) => user,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Busy,
    Swappable,
    SwapPending,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Busy => "BUSY",
            EventStatus::Swappable => "SWAPPABLE",
            EventStatus::SwapPending => "SWAP_PENDING",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Busy => "Busy",
            EventStatus::Swappable => "Swappable",
            EventStatus::SwapPending => "Swap pending",
        }
    }

    /// Owner-side edits are locked while a swap is in flight.
    pub fn is_locked(&self) -> bool {
        matches!(self, EventStatus::SwapPending)
    }

    /// BUSY and SWAPPABLE flip into each other; SWAP_PENDING has no manual toggle.
    pub fn toggled(&self) -> Option<EventStatus> {
        match self {
            EventStatus::Busy => Some(EventStatus::Swappable),
            EventStatus::Swappable => Some(EventStatus::Busy),
            EventStatus::SwapPending => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EventStatusRequest {
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwappableSlot {
    pub id: i64,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub owner_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSwapRequest {
    pub requester_slot_id: i64,
    pub responder_slot_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwapDecision {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwapResponseRequest {
    pub status: SwapDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequestRecord {
    pub id: i64,
    #[serde(default)]
    pub requester_user_id: Option<i64>,
    #[serde(default)]
    pub responder_user_id: Option<i64>,
    pub requester_slot_id: i64,
    pub responder_slot_id: i64,
    pub status: SwapRequestStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingSwapRequest {
    pub id: i64,
    pub requester_name: String,
    pub requester_event_title: String,
    pub requester_event_start_time: DateTime<Utc>,
    pub requester_event_end_time: DateTime<Utc>,
    pub responder_event_title: String,
    pub responder_event_start_time: DateTime<Utc>,
    pub responder_event_end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingSwapRequest {
    pub id: i64,
    pub responder_name: String,
    pub requester_event_title: String,
    pub requester_event_start_time: DateTime<Utc>,
    pub requester_event_end_time: DateTime<Utc>,
    pub responder_event_title: String,
    pub responder_event_start_time: DateTime<Utc>,
    pub responder_event_end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn http(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }

    /// Builds the error surfaced for a non-2xx response. The backend answers
    /// with plain text; a JSON body with an `error` field is honoured too.
    pub fn from_response(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = serde_json::from_str::<Value>(trimmed)
            .ok()
            .and_then(|value| {
                value
                    .get("error")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
            })
            .unwrap_or_else(|| trimmed.to_string());
        let message = if message.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            message
        };
        if status == 401 {
            Self::unauthorized(message)
        } else {
            Self::http(status, message)
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }
}
