//! CLI definition and execution

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chatwork_notify_core::{format_message, ChatworkClient, MappingTable, WebhookKind};
use clap::Parser;

/// cwn - post GitHub webhook notifications to a Chatwork room
///
/// The webhook payload is read from stdin as a single JSON document.
#[derive(Parser, Debug)]
#[command(
    name = "cwn",
    version,
    about = "Post GitHub webhook notifications to a Chatwork room",
    long_about = "Reads a GitHub webhook payload from stdin, formats a Chatwork message \
                  for the event, and posts it via the Chatwork REST API"
)]
pub struct Cli {
    /// Webhook kind: pr, issue, prcomment, or issuecomment
    #[arg(short = 'w', long)]
    webhook: WebhookKind,

    /// Chatwork room id to post into
    #[arg(short = 'r', long)]
    room: String,

    /// Chatwork API token
    #[arg(short = 't', long)]
    token: String,

    /// CSV mapping file (GitHub login,Chatwork id), one pair per line
    #[arg(short = 'm', long)]
    mapping: Option<PathBuf>,

    /// Print the formatted message to stdout instead of posting it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Run the stdin → mapping → format → deliver pipeline.
    pub fn execute(self) -> Result<()> {
        let mut payload = String::new();
        io::stdin()
            .read_to_string(&mut payload)
            .context("failed to read payload from stdin")?;

        let table = MappingTable::load(self.mapping.as_deref())?;
        let message = format_message(self.webhook, &payload, &table)?;

        if self.dry_run {
            if let Some(message) = &message {
                println!("{message}");
            }
            return Ok(());
        }

        // Fire-and-forget: delivery failures are logged by the client and do
        // not affect the exit code.
        let client = ChatworkClient::new(&self.token);
        client.send(&self.room, message.as_deref());
        Ok(())
    }
}
