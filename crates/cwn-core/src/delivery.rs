//! Chatwork message delivery
//!
//! One synchronous POST to `https://api.chatwork.com/v2/rooms/{room_id}/messages`
//! with the message percent-encoded into the `body` query parameter and the
//! API token in the `X-ChatWorkToken` header.
//!
//! Delivery is fire-and-forget: the response (status, headers, body) and any
//! transport failure are logged, but neither changes the process exit code.
//! The outcome is still reported to the caller so the policy could change in
//! one place.

use tracing::{info, warn};

/// Default Chatwork API endpoint.
pub const CHATWORK_API_BASE: &str = "https://api.chatwork.com";

/// Result of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// No message to send; no request was made.
    Skipped,
    /// The API answered; carries the HTTP status code.
    Delivered(u16),
    /// Transport-level failure (connect, TLS, timeout). Logged, non-fatal.
    Failed,
}

/// Thin synchronous client for the Chatwork messages endpoint.
#[derive(Debug)]
pub struct ChatworkClient {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
}

impl ChatworkClient {
    /// Client against the production Chatwork API.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, CHATWORK_API_BASE)
    }

    /// Client against an alternative endpoint. Used by tests.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// URL for posting messages to `room_id` (without the `body` parameter).
    pub fn messages_url(&self, room_id: &str) -> String {
        format!("{}/v2/rooms/{}/messages", self.base_url, room_id)
    }

    /// Send `message` to `room_id`. An absent message is a no-op.
    pub fn send(&self, room_id: &str, message: Option<&str>) -> DeliveryOutcome {
        let Some(message) = message else {
            info!("no message produced; nothing to deliver");
            return DeliveryOutcome::Skipped;
        };

        let result = self
            .http
            .post(self.messages_url(room_id))
            .query(&[("body", message)])
            .header("X-ChatWorkToken", &self.token)
            .send();

        match result {
            Ok(response) => {
                let status = response.status();
                info!(status = %status, "chatwork response");
                info!(headers = ?response.headers(), "chatwork response headers");
                match response.text() {
                    Ok(body) => info!(%body, "chatwork response body"),
                    Err(e) => warn!(error = %e, "failed to read chatwork response body"),
                }
                DeliveryOutcome::Delivered(status.as_u16())
            }
            Err(e) => {
                warn!(error = %e, "failed to deliver message to chatwork");
                DeliveryOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_url_uses_room_id() {
        let client = ChatworkClient::new("secret");
        assert_eq!(
            client.messages_url("42"),
            "https://api.chatwork.com/v2/rooms/42/messages"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ChatworkClient::with_base_url("secret", "http://localhost:9999/");
        assert_eq!(
            client.messages_url("7"),
            "http://localhost:9999/v2/rooms/7/messages"
        );
    }

    #[test]
    fn absent_message_is_skipped() {
        // No server is listening here; Skipped must short-circuit before
        // any request is attempted.
        let client = ChatworkClient::with_base_url("secret", "http://127.0.0.1:1");
        assert_eq!(client.send("42", None), DeliveryOutcome::Skipped);
    }

    #[test]
    fn transport_failure_is_non_fatal() {
        // Port 1 refuses connections; the failure must degrade to an outcome
        // value rather than an Err or panic.
        let client = ChatworkClient::with_base_url("secret", "http://127.0.0.1:1");
        assert_eq!(client.send("42", Some("hello")), DeliveryOutcome::Failed);
    }
}
