//! Relay-facing packet construction.
//!
//! The relay calls exactly two entry points: [`Dispatcher::create`] for an
//! empty instance by identifier, and [`Dispatcher::create_from_bytes`] to
//! decode a payload. Decoding runs the drift check: the fresh instance is
//! re-encoded and its length compared against the wire payload, surfacing
//! layout drift without ever rejecting the packet.

use crate::core::io::PacketReader;
use crate::error::Result;
use crate::protocol::diagnostics::DiagnosticSink;
use crate::protocol::packet::{Packet, Unknown};
use crate::protocol::registry::Registry;
use std::sync::Arc;

/// Shared-state packet factory. Cheap to clone; one per relay is plenty.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<Registry>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Dispatcher {
    pub fn new(registry: Arc<Registry>, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            registry,
            diagnostics,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Fresh default instance for `id`; Unknown fallback if no variant is
    /// registered. Identifiers above the table range cannot appear on the
    /// wire (the frame carries a single byte and mappings cap at 126), so
    /// they also fall through to Unknown.
    pub fn create(&self, id: u8) -> Packet {
        self.registry.create(id)
    }

    /// Decode `bytes` into a populated instance for `id`.
    ///
    /// Malformed payloads propagate [`FormatError`](crate::FormatError)
    /// unchanged; the relay decides between dropping the packet and dropping
    /// the connection. Unrecognized identifiers never fail: the payload is
    /// kept verbatim in an Unknown for opaque pass-through.
    ///
    /// On success the drift check re-encodes the instance and emits
    /// `drift_detected` if the byte length no longer matches the wire;
    /// decoding still succeeds, since the fields that did parse are usually
    /// all the relay needs.
    pub fn create_from_bytes(&self, id: u8, bytes: &[u8]) -> Result<Packet> {
        let slot = match self.registry.lookup(id) {
            Some(slot) => slot,
            None => {
                return Ok(Packet::Unknown(Unknown {
                    id,
                    raw: bytes.to_vec(),
                }))
            }
        };

        let mut reader = PacketReader::new(bytes);
        let packet = slot.decode(&mut reader)?;

        let reencoded_len = packet.encode().len();
        if reencoded_len != bytes.len() {
            self.diagnostics
                .drift_detected(packet.name(), bytes.len(), reencoded_len);
        }

        Ok(packet)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
