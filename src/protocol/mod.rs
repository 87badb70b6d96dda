//! # Protocol Layer
//!
//! Packet kinds, the dispatch registry, and diagnostics.
//!
//! ## Components
//! - **Packet**: the tagged union over all compiled kinds plus Unknown
//! - **Registry**: identifier → variant table, built once at startup
//! - **Dispatcher**: the relay's two entry points, with the drift check
//! - **Diagnostics**: structured build/decode events for the relay's logs
//!
//! Identifiers live in the external mappings, never in the code: the same
//! binary keeps working across upstream identifier reshuffles with only a
//! mappings file update.

pub mod client;
pub mod data;
pub mod diagnostics;
pub mod dispatcher;
pub mod packet;
pub mod registry;
pub mod server;

#[cfg(test)]
mod tests;
