//! Core library for chatwork-notify (cwn)
//!
//! This crate provides the building blocks for turning a GitHub webhook
//! payload into a Chatwork room message:
//!
//! - [`mapping`]: loads the GitHub-login → Chatwork-id CSV mapping table
//! - [`schema`]: typed models for the four supported webhook payloads
//! - [`mention`]: `@login` → `[To:id]` mention substitution
//! - [`format`]: per-kind, per-action message formatting
//! - [`delivery`]: the one outbound POST to the Chatwork REST API
//!
//! Formatting is pure and deterministic; the only side effects live in
//! [`mapping::MappingTable::load`] (one file read) and [`delivery`] (one
//! HTTP request).

pub mod delivery;
pub mod error;
pub mod format;
pub mod logging;
pub mod mapping;
pub mod mention;
pub mod schema;

pub use delivery::{ChatworkClient, DeliveryOutcome};
pub use error::NotifyError;
pub use format::{format_message, WebhookKind};
pub use mapping::{MappingEntry, MappingTable};
