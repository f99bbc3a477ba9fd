//! `@login` → `[To:id]` mention substitution
//!
//! A mention token `@<login>` only matches when the character immediately
//! after it is not an ASCII letter, digit, or hyphen (or the token ends the
//! string). `@bob` therefore matches in `"hi @bob!"` but not inside
//! `"@bob2"` or `"@bob-x"`. The boundary character itself is preserved.

use crate::mapping::MappingTable;

/// Render a single account as a Chatwork mention.
///
/// Returns `[To:<chatwork_id>]` when `login` is in the table, otherwise the
/// raw login unchanged.
pub fn resolve_mention(login: &str, table: &MappingTable) -> String {
    match table.lookup(login) {
        Some(id) => format!("[To:{id}]"),
        None => login.to_string(),
    }
}

/// Substitute every mapped `@login` mention in `body`.
///
/// Entries are applied sequentially in table order over the progressively
/// rewritten string, so when two logins could match overlapping text the
/// earlier table entry wins. Replacements never introduce new `@` tokens,
/// which makes the substitution idempotent under a stable table.
pub fn substitute_mentions(body: &str, table: &MappingTable) -> String {
    let mut result = body.to_string();
    for entry in table.entries() {
        result = substitute_entry(&result, &entry.github_login, &entry.chatwork_id);
    }
    result
}

fn substitute_entry(body: &str, login: &str, chatwork_id: &str) -> String {
    let token = format!("@{login}");
    let replacement = format!("[To:{chatwork_id}]");
    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(pos) = rest.find(&token) {
        let (head, tail) = rest.split_at(pos + token.len());
        if at_token_boundary(tail) {
            out.push_str(&head[..pos]);
            out.push_str(&replacement);
        } else {
            out.push_str(head);
        }
        rest = tail;
    }
    out.push_str(rest);
    out
}

/// True when `rest` (the text following a matched token) starts at a valid
/// mention boundary.
fn at_token_boundary(rest: &str) -> bool {
    match rest.chars().next() {
        None => true,
        Some(c) => !(c.is_ascii_alphanumeric() || c == '-'),
    }
}
