//! Typed models for the GitHub webhook payloads we consume
//!
//! Only the fields the formatter reads are modeled; everything else in the
//! payload is ignored. A missing required field (e.g. `pull_request`,
//! `sender`, `user.login`) surfaces as a `serde_json::Error`, which the
//! formatter converts into [`crate::NotifyError::Payload`].

use serde::Deserialize;

/// A GitHub account (`user`, `sender`, comment author).
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub login: String,
}

/// The `pull_request` object of a pull request event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub html_url: String,
    pub user: Account,
    /// PR description. GitHub sends an explicit `null` when empty.
    #[serde(default)]
    pub body: Option<String>,
    /// Set on `closed` events; distinguishes merged from merely closed.
    #[serde(default)]
    pub merged: bool,
}

/// The `issue` object of an issue or issue-comment event.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub title: String,
    pub html_url: String,
    pub user: Account,
    #[serde(default)]
    pub body: Option<String>,
    /// Present (any value) when the "issue" is actually a pull request.
    /// Issue-comment events fire for PR conversations too; this is how
    /// GitHub marks them apart.
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

/// A review or issue comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub html_url: String,
    pub user: Account,
    #[serde(default)]
    pub body: Option<String>,
}

/// Actions on a pull request or issue resource.
///
/// GitHub sends many more action values (`labeled`, `assigned`, ...); they
/// all decode to [`ResourceAction::Unknown`] and produce no message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceAction {
    Opened,
    Closed,
    Reopened,
    #[serde(other)]
    Unknown,
}

/// Actions on a comment. Only `created` produces a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentAction {
    Created,
    #[serde(other)]
    Unknown,
}

/// Payload shape for `--webhook pr`.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    pub action: ResourceAction,
    pub pull_request: PullRequest,
    pub sender: Account,
}

/// Payload shape for `--webhook issue`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueEvent {
    pub action: ResourceAction,
    pub issue: Issue,
    pub sender: Account,
}

/// Payload shape for `--webhook prcomment` (pull request review comment).
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestCommentEvent {
    pub action: CommentAction,
    pub pull_request: PullRequest,
    pub comment: Comment,
}

/// Payload shape for `--webhook issuecomment`.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueCommentEvent {
    pub action: CommentAction,
    pub issue: Issue,
    pub comment: Comment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_decodes_to_unknown() {
        let action: ResourceAction = serde_json::from_str("\"labeled\"").unwrap();
        assert_eq!(action, ResourceAction::Unknown);

        let action: CommentAction = serde_json::from_str("\"deleted\"").unwrap();
        assert_eq!(action, CommentAction::Unknown);
    }

    #[test]
    fn pull_request_event_decodes_minimal() {
        let json = r#"{
            "action": "opened",
            "pull_request": {
                "title": "Fix bug",
                "html_url": "http://x/1",
                "user": {"login": "alice"},
                "body": null
            },
            "sender": {"login": "alice"}
        }"#;
        let event: PullRequestEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.action, ResourceAction::Opened);
        assert_eq!(event.pull_request.user.login, "alice");
        assert!(event.pull_request.body.is_none());
        assert!(!event.pull_request.merged);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        // No `sender`
        let json = r#"{
            "action": "closed",
            "pull_request": {
                "title": "Fix bug",
                "html_url": "http://x/1",
                "user": {"login": "alice"}
            }
        }"#;
        assert!(serde_json::from_str::<PullRequestEvent>(json).is_err());
    }

    #[test]
    fn issue_pull_request_marker_is_optional() {
        let json = r#"{
            "title": "A question",
            "html_url": "http://x/2",
            "user": {"login": "bob"}
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(issue.pull_request.is_none());

        let json = r#"{
            "title": "A fix",
            "html_url": "http://x/3",
            "user": {"login": "bob"},
            "pull_request": {"url": "http://x/3.patch"}
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert!(issue.pull_request.is_some());
    }
}
