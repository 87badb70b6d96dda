//! # Relay Protocol
//!
//! Packet registry and codec core for a game client-server relay.
//!
//! A relay sits between a game client and its server, inspecting, logging,
//! and forwarding traffic. This crate is the part that understands the wire:
//! it maps the single-byte packet identifier to a typed packet variant,
//! decodes payloads into fields, re-encodes them byte-for-byte, and flags
//! when its understanding of the protocol has drifted from the traffic
//! actually observed.
//!
//! ## Components
//! - **[`config::PacketMappings`]**: the external name → identifier table,
//!   loaded at startup.
//! - **[`protocol::registry::Registry`]**: 128-slot identifier → variant
//!   table, built once, immutable and lock-free thereafter.
//! - **[`protocol::dispatcher::Dispatcher`]**: the relay-facing entry points
//!   `create(id)` and `create_from_bytes(id, bytes)`.
//! - **[`core::codec::RelayCodec`]**: framing codec for the relay's socket
//!   streams (`[u32 length][u8 id][payload]`).
//!
//! ## Example
//! ```no_run
//! use std::sync::Arc;
//! use relay_protocol::config::PacketMappings;
//! use relay_protocol::protocol::diagnostics::TracingSink;
//! use relay_protocol::protocol::packet::VARIANTS;
//! use relay_protocol::protocol::registry::Registry;
//! use relay_protocol::protocol::dispatcher::Dispatcher;
//!
//! # fn main() -> relay_protocol::Result<()> {
//! let mappings = PacketMappings::from_file("packets.toml")?;
//! let sink = Arc::new(TracingSink);
//! let registry = Arc::new(Registry::build(VARIANTS, &mappings, sink.as_ref())?);
//! let dispatcher = Dispatcher::new(registry, sink);
//!
//! let packet = dispatcher.create_from_bytes(23, &[0x00, 0x03, b'F', b'o', b'o'])?;
//! assert_eq!(packet.name(), "CREATEGUILD");
//! # Ok(())
//! # }
//! ```
//!
//! Unrecognized identifiers never fail: they decode to an
//! [`protocol::packet::Unknown`] variant that re-emits its payload verbatim,
//! so the relay keeps forwarding traffic the codec does not yet understand.

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use error::{FormatError, ProtocolError, Result};
pub use protocol::dispatcher::Dispatcher;
pub use protocol::packet::Packet;
pub use protocol::registry::Registry;
