//! Error types for webhook notification processing

use thiserror::Error;

/// Fatal errors raised before any network call is made.
///
/// Delivery failures are deliberately not represented here: contacting the
/// Chatwork API is fire-and-forget and degrades to a log line (see
/// [`crate::delivery`]).
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Mapping file row does not have exactly two columns
    #[error("invalid mapping file format at line {line}: expected 2 columns, found {found}")]
    InvalidMapping { line: usize, found: usize },

    /// Webhook kind string is not one of the supported values
    #[error("invalid webhook '{0}' (expected pr, issue, prcomment, or issuecomment)")]
    InvalidWebhook(String),

    /// Webhook payload could not be decoded (malformed JSON or a required
    /// field is absent)
    #[error("invalid {kind} payload: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// I/O error (reading stdin or the mapping file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
