use crate::types::message::MessageResponse;
use reqwest::StatusCode;

pub const MESSAGE_PATH: &str = "/api/message";

/// Every variant renders to the single error line shown in the view.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(reqwest::Error),
    #[error("Failed to fetch data (HTTP {})", .0.as_u16())]
    Status(StatusCode),
    #[error("Failed to read response: {0}")]
    Decode(reqwest::Error),
}

/// Where the view gets its message from.
#[rocket::async_trait]
pub trait MessageSource: Send + Sync {
    async fn fetch_message(&self) -> Result<MessageResponse, FetchError>;
}

pub struct HttpMessageSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMessageSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{MESSAGE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[rocket::async_trait]
impl MessageSource for HttpMessageSource {
    async fn fetch_message(&self) -> Result<MessageResponse, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let message: MessageResponse = response.json().await.map_err(FetchError::Decode)?;
        if let Err(e) = message.issued_at() {
            tracing::warn!(
                timestamp = %message.timestamp,
                error = %e,
                "backend timestamp is not RFC 3339"
            );
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{stub_backend, unreachable_url};

    #[test]
    fn test_endpoint_joins_base_url() {
        let source = HttpMessageSource::new("http://backend:5001/");
        assert_eq!(source.endpoint(), "http://backend:5001/api/message");
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Failed to fetch data (HTTP 503)");
    }

    #[tokio::test]
    async fn test_fetch_decodes_message() {
        let url = stub_backend(
            200,
            r#"{"message":"x","timestamp":"t","status":"success"}"#,
        )
        .await;
        let msg = HttpMessageSource::new(&url)
            .fetch_message()
            .await
            .expect("message");
        assert_eq!(msg.message, "x");
        assert_eq!(msg.timestamp, "t");
        assert_eq!(msg.status, "success");
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_status_error() {
        let url = stub_backend(500, r#"{"error":"down"}"#).await;
        let err = HttpMessageSource::new(&url)
            .fetch_message()
            .await
            .expect_err("status error");
        assert!(matches!(err, FetchError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_decode_error() {
        let url = stub_backend(200, r#"{"unexpected":true}"#).await;
        let err = HttpMessageSource::new(&url)
            .fetch_message()
            .await
            .expect_err("decode error");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused_is_transport_error() {
        let url = unreachable_url().await;
        let err = HttpMessageSource::new(&url)
            .fetch_message()
            .await
            .expect_err("transport error");
        assert!(matches!(err, FetchError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
