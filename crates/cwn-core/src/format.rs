//! Webhook payload → Chatwork message formatting
//!
//! This is the heart of the tool: given a webhook kind, the raw JSON payload,
//! and the mapping table, produce zero or one Chatwork message. Every message
//! uses the same envelope:
//!
//! ```text
//! <prefix>[info][title]<title>[/title]<body>[/info]
//! ```
//!
//! where `<prefix>` is empty or a `To: <mention>` tag addressing the resource
//! author. Actions outside the recognized set produce no message at all;
//! that is a normal outcome, not an error.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::NotifyError;
use crate::mapping::MappingTable;
use crate::mention::{resolve_mention, substitute_mentions};
use crate::schema::{
    CommentAction, IssueCommentEvent, IssueEvent, PullRequestCommentEvent, PullRequestEvent,
    ResourceAction,
};

/// The four webhook payload shapes this tool understands.
///
/// Parsed from the `--webhook` CLI flag; any other value is rejected before
/// the mapping file is read or any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookKind {
    PullRequest,
    Issue,
    PullRequestComment,
    IssueComment,
}

impl WebhookKind {
    /// The CLI spelling of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            WebhookKind::PullRequest => "pr",
            WebhookKind::Issue => "issue",
            WebhookKind::PullRequestComment => "prcomment",
            WebhookKind::IssueComment => "issuecomment",
        }
    }
}

impl FromStr for WebhookKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pr" => Ok(WebhookKind::PullRequest),
            "issue" => Ok(WebhookKind::Issue),
            "prcomment" => Ok(WebhookKind::PullRequestComment),
            "issuecomment" => Ok(WebhookKind::IssueComment),
            other => Err(NotifyError::InvalidWebhook(other.to_string())),
        }
    }
}

impl fmt::Display for WebhookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a Chatwork message for `payload` under webhook kind `kind`.
///
/// Returns `Ok(None)` when the event's action is recognized as one that
/// produces no notification (e.g. `labeled`, comment `edited`).
///
/// # Errors
///
/// Returns [`NotifyError::Payload`] when the payload is not valid JSON or a
/// required field is absent.
pub fn format_message(
    kind: WebhookKind,
    payload: &str,
    table: &MappingTable,
) -> Result<Option<String>, NotifyError> {
    match kind {
        WebhookKind::PullRequest => {
            let event: PullRequestEvent = decode("pull request event", payload)?;
            Ok(pull_request_message(&event, table))
        }
        WebhookKind::Issue => {
            let event: IssueEvent = decode("issue event", payload)?;
            Ok(issue_message(&event, table))
        }
        WebhookKind::PullRequestComment => {
            let event: PullRequestCommentEvent = decode("pull request comment event", payload)?;
            Ok(pull_request_comment_message(&event, table))
        }
        WebhookKind::IssueComment => {
            let event: IssueCommentEvent = decode("issue comment event", payload)?;
            Ok(issue_comment_message(&event, table))
        }
    }
}

fn decode<T: DeserializeOwned>(kind: &'static str, payload: &str) -> Result<T, NotifyError> {
    serde_json::from_str(payload).map_err(|source| NotifyError::Payload { kind, source })
}

/// Wrap a message into the Chatwork info-block envelope.
fn envelope(prefix: &str, title: &str, body: &str) -> String {
    format!("{prefix}[info][title]{title}[/title]{body}[/info]")
}

fn pull_request_message(event: &PullRequestEvent, table: &MappingTable) -> Option<String> {
    let pr = &event.pull_request;
    let author = resolve_mention(&pr.user.login, table);
    let header = format!("{}\n{}", pr.title, pr.html_url);

    match event.action {
        ResourceAction::Opened => {
            let body = substitute_mentions(pr.body.as_deref().unwrap_or(""), table);
            Some(envelope(
                "",
                &format!("Pull Request was opened! by: {author}"),
                &format!("{header}\n\n{body}"),
            ))
        }
        ResourceAction::Closed => {
            let verb = if pr.merged { "merged" } else { "closed" };
            let sender = resolve_mention(&event.sender.login, table);
            Some(envelope(
                &format!("To: {author}"),
                &format!("Pull Request was {verb}! by: {sender}"),
                &header,
            ))
        }
        ResourceAction::Reopened => {
            let sender = resolve_mention(&event.sender.login, table);
            Some(envelope(
                &format!("To: {author}"),
                &format!("Pull Request was reopened! by: {sender}"),
                &header,
            ))
        }
        ResourceAction::Unknown => None,
    }
}

fn issue_message(event: &IssueEvent, table: &MappingTable) -> Option<String> {
    let issue = &event.issue;
    let author = resolve_mention(&issue.user.login, table);
    let header = format!("{}\n{}", issue.title, issue.html_url);

    match event.action {
        ResourceAction::Opened => {
            let body = substitute_mentions(issue.body.as_deref().unwrap_or(""), table);
            Some(envelope(
                "",
                &format!("issue was opened! by: {author}"),
                &format!("{header}\n\n{body}"),
            ))
        }
        ResourceAction::Closed => {
            let sender = resolve_mention(&event.sender.login, table);
            Some(envelope(
                &format!("To: {author}"),
                &format!("issue was closed! by: {sender}"),
                &header,
            ))
        }
        ResourceAction::Reopened => {
            let sender = resolve_mention(&event.sender.login, table);
            Some(envelope(
                &format!("To: {author}"),
                &format!("issue was reopened! by: {sender}"),
                &header,
            ))
        }
        ResourceAction::Unknown => None,
    }
}

fn pull_request_comment_message(
    event: &PullRequestCommentEvent,
    table: &MappingTable,
) -> Option<String> {
    if event.action != CommentAction::Created {
        return None;
    }
    let pr = &event.pull_request;
    let comment = &event.comment;
    let author = resolve_mention(&pr.user.login, table);
    let from = resolve_mention(&comment.user.login, table);
    let body = substitute_mentions(comment.body.as_deref().unwrap_or(""), table);
    Some(envelope(
        &format!("To: {author}"),
        &format!("Pull Request received a comment! From: {from}"),
        &format!("{}\n{}\n\n{body}", pr.title, comment.html_url),
    ))
}

fn issue_comment_message(event: &IssueCommentEvent, table: &MappingTable) -> Option<String> {
    if event.action != CommentAction::Created {
        return None;
    }
    let issue = &event.issue;
    let comment = &event.comment;
    // Issue-comment events fire for PR conversations too; the payload marks
    // those with an `issue.pull_request` reference.
    let resource = if issue.pull_request.is_some() {
        "Pull Request"
    } else {
        "issue"
    };
    let author = resolve_mention(&issue.user.login, table);
    let from = resolve_mention(&comment.user.login, table);
    let body = substitute_mentions(comment.body.as_deref().unwrap_or(""), table);
    Some(envelope(
        &format!("To: {author}"),
        &format!("{resource} received a comment! From: {from}"),
        &format!("{}\n{}\n\n{body}", issue.title, comment.html_url),
    ))
}
