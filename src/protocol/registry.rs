//! The identifier → variant dispatch table.
//!
//! Built exactly once at startup from the compiled variant list and the
//! external name → identifier mappings, then never mutated: any number of
//! connections may read it concurrently without locks.
//!
//! Build is strict where silence would corrupt dispatch (duplicate
//! identifiers, a variant the mappings do not know) and advisory where the
//! relay can keep working (mapping entries with no compiled variant are
//! reported and dispatched as [`Unknown`](crate::protocol::packet::Unknown)).

use crate::config::{PacketMappings, MAX_PACKET_ID};
use crate::core::io::PacketReader;
use crate::error::{FormatError, ProtocolError, Result};
use crate::protocol::diagnostics::DiagnosticSink;
use crate::protocol::packet::{Packet, Unknown, VariantSpec};

/// Number of dispatch slots; identifiers occupy `0..=126`.
pub const SLOT_COUNT: usize = 128;

/// One populated slot: a variant plus the identifier resolved for it at
/// build time.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub id: u8,
    pub name: &'static str,
    make: fn() -> Packet,
    decode: fn(&mut PacketReader<'_>) -> std::result::Result<Packet, FormatError>,
}

impl Slot {
    /// Fresh default-constructed instance of this kind.
    pub fn make(&self) -> Packet {
        (self.make)()
    }

    /// Decode a payload into a populated instance of this kind.
    pub fn decode(&self, r: &mut PacketReader<'_>) -> std::result::Result<Packet, FormatError> {
        (self.decode)(r)
    }
}

/// Immutable identifier → variant table.
#[derive(Debug)]
pub struct Registry {
    slots: [Option<Slot>; SLOT_COUNT],
}

impl Registry {
    /// Build the table from the compiled variant list and the external
    /// mappings, emitting build diagnostics to `sink`.
    ///
    /// Fails on defects that would corrupt dispatch:
    /// - two variants resolving to the same identifier
    ///   ([`ProtocolError::RegistryConflict`]);
    /// - a variant whose name the mappings do not contain
    ///   ([`ProtocolError::UnresolvedVariant`]);
    /// - a mapped identifier outside `0..=126`.
    ///
    /// Mapping entries with no compiled variant are *not* failures: they are
    /// reported via `mapping_missing` so operators can see coverage gaps,
    /// and dispatch for those identifiers falls back to Unknown.
    pub fn build(
        variants: &[VariantSpec],
        mappings: &PacketMappings,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self> {
        let mut slots: [Option<Slot>; SLOT_COUNT] = [None; SLOT_COUNT];

        for spec in variants {
            let id = mappings
                .lookup(spec.name)
                .ok_or(ProtocolError::UnresolvedVariant(spec.name))?;
            if id > MAX_PACKET_ID {
                return Err(ProtocolError::ConfigError(format!(
                    "identifier {id} for {} outside valid range 0..={MAX_PACKET_ID}",
                    spec.name
                )));
            }
            if let Some(existing) = &slots[id as usize] {
                return Err(ProtocolError::RegistryConflict {
                    id,
                    existing: existing.name,
                    incoming: spec.name,
                });
            }
            slots[id as usize] = Some(Slot {
                id,
                name: spec.name,
                make: spec.make,
                decode: spec.decode,
            });
            sink.mapping_established(spec.name, id);
        }

        let registry = Self { slots };

        // Coverage sweep: every external entry the compiled set does not
        // answer for is a gap the operator should know about.
        for (name, id) in mappings.iter() {
            if registry.create(id).is_unknown() {
                sink.mapping_missing(name, id);
            }
        }

        Ok(registry)
    }

    /// Slot registered for `id`, if any.
    pub fn lookup(&self, id: u8) -> Option<&Slot> {
        self.slots.get(id as usize).and_then(|s| s.as_ref())
    }

    /// Fresh default instance for `id`, or the Unknown fallback carrying the
    /// identifier verbatim.
    pub fn create(&self, id: u8) -> Packet {
        match self.lookup(id) {
            Some(slot) => slot.make(),
            None => Packet::Unknown(Unknown {
                id,
                raw: Vec::new(),
            }),
        }
    }

    /// Identifier resolved for a variant name at build time.
    pub fn identifier_of(&self, name: &str) -> Option<u8> {
        self.slots
            .iter()
            .flatten()
            .find(|slot| slot.name == name)
            .map(|slot| slot.id)
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate populated slots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().flatten()
    }
}
