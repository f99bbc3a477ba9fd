//! cwn - GitHub webhook notifications for Chatwork rooms
//!
//! Reads a GitHub webhook payload from stdin, formats a Chatwork message for
//! the event, and posts it to a room via the Chatwork REST API.

use clap::Parser;

mod cli;

use cli::Cli;

fn main() {
    chatwork_notify_core::logging::init();
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
