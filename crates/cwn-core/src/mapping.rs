//! GitHub-login → Chatwork-id mapping table
//!
//! The mapping source is a two-column CSV file with no header row:
//!
//! ```text
//! alice,111
//! bob,222
//! ```
//!
//! Column 1 is the GitHub login, column 2 the Chatwork account id. The table
//! is loaded once at startup and is read-only afterwards. Duplicate logins
//! are not rejected; lookups return the first match in file order.

use std::fs;
use std::path::Path;

use crate::error::NotifyError;

/// One row of the mapping file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// GitHub login (the `@name` used in PR/issue bodies)
    pub github_login: String,
    /// Chatwork account id (the numeric id used in `[To:id]` tags)
    pub chatwork_id: String,
}

/// Ordered, immutable collection of mapping entries.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: Vec<MappingEntry>,
}

impl MappingTable {
    /// An empty table. Lookups fall back to the raw GitHub login.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the table from an optional CSV path.
    ///
    /// `None` yields an empty table (running without a mapping file is
    /// supported; mentions then pass through unsubstituted).
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::Io`] if the file cannot be read and
    /// [`NotifyError::InvalidMapping`] if any row does not have exactly two
    /// columns.
    pub fn load(path: Option<&Path>) -> Result<Self, NotifyError> {
        match path {
            None => Ok(Self::empty()),
            Some(path) => Self::parse(&fs::read_to_string(path)?),
        }
    }

    /// Parse CSV text into a table. Blank lines are skipped; trailing CR
    /// from CRLF line endings is tolerated. No deduplication, input order
    /// preserved.
    pub fn parse(text: &str) -> Result<Self, NotifyError> {
        let mut entries = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let columns: Vec<&str> = line.split(',').collect();
            if columns.len() != 2 {
                return Err(NotifyError::InvalidMapping {
                    line: idx + 1,
                    found: columns.len(),
                });
            }
            entries.push(MappingEntry {
                github_login: columns[0].to_string(),
                chatwork_id: columns[1].to_string(),
            });
        }
        Ok(Self { entries })
    }

    /// First Chatwork id mapped to `login`, if any.
    pub fn lookup(&self, login: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.github_login == login)
            .map(|e| e.chatwork_id.as_str())
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
