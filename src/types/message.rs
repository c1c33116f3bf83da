use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GREETING: &str = "Hello from Rust Backend!";
pub const STATUS_SUCCESS: &str = "success";

/// Payload of `GET /api/message`. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Hello from Rust Backend!")]
    pub message: String,
    /// RFC 3339 UTC instant with millisecond precision.
    #[schema(example = "2026-10-18T12:34:56.789Z")]
    pub timestamp: String,
    #[schema(example = "success")]
    pub status: String,
}

impl MessageResponse {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            message: GREETING.into(),
            timestamp: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: STATUS_SUCCESS.into(),
        }
    }

    pub fn issued_at(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.timestamp).map(|t| t.with_timezone(&Utc))
    }
}
