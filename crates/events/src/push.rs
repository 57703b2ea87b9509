//! Topic-addressed push notification transport.
//!
//! [`HttpPush`] sends a JSON push payload to all subscribers of a topic
//! (the recipient's user id) via an FCM-style HTTP endpoint, authenticated
//! with an API key configured at startup. Delivery is best-effort with a
//! bounded request timeout and no synchronous retry; the caller logs and
//! swallows failures.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Default push service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://fcm.googleapis.com/fcm/send";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for push delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The push service returned a non-2xx status code.
    #[error("Push service returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// PushMessage
// ---------------------------------------------------------------------------

/// The structured payload handed to the push transport.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PushMessage {
    /// Short title shown in the client notification.
    pub title: String,
    /// Body text shown in the client notification.
    pub body: String,
    /// URL of the badge icon to display.
    pub badge: String,
    /// The recipient's current unread count.
    pub unread_count: i64,
}

// ---------------------------------------------------------------------------
// PushTransport
// ---------------------------------------------------------------------------

/// A sender of topic-addressed push messages.
///
/// The engine receives this as an injected dependency so tests can swap in
/// a recording implementation.
#[async_trait]
pub trait PushTransport: Send + Sync {
    /// Deliver a message to all subscribers of `topic`.
    async fn send_topic_message(&self, topic: &str, message: &PushMessage)
        -> Result<(), PushError>;
}

// ---------------------------------------------------------------------------
// HttpPush
// ---------------------------------------------------------------------------

/// Push transport backed by an FCM-style HTTP endpoint.
pub struct HttpPush {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpPush {
    /// Create a transport for the given endpoint and API key.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl PushTransport for HttpPush {
    async fn send_topic_message(
        &self,
        topic: &str,
        message: &PushMessage,
    ) -> Result<(), PushError> {
        let payload = serde_json::json!({
            "to": format!("/topics/{topic}"),
            "data": message,
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("key={}", self.api_key))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PushError::HttpStatus(response.status().as_u16()));
        }

        tracing::debug!(topic, "Push message delivered");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _push = HttpPush::new(DEFAULT_ENDPOINT, "test-key");
    }

    #[test]
    fn push_error_display_http_status() {
        let err = PushError::HttpStatus(503);
        assert_eq!(err.to_string(), "Push service returned HTTP 503");
    }

    #[test]
    fn push_message_serializes_all_fields() {
        let message = PushMessage {
            title: "t".to_string(),
            body: "b".to_string(),
            badge: "/icon.png".to_string(),
            unread_count: 4,
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["title"], "t");
        assert_eq!(value["body"], "b");
        assert_eq!(value["badge"], "/icon.png");
        assert_eq!(value["unread_count"], 4);
    }
}
