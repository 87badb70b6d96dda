// test-only module included via protocol/mod.rs
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::config::PacketMappings;
use crate::core::io::PacketWriter;
use crate::error::ProtocolError;
use crate::protocol::client::CreateGuild;
use crate::protocol::diagnostics::{Diagnostic, RecordingSink};
use crate::protocol::dispatcher::Dispatcher;
use crate::protocol::packet::{Packet, PacketBody, Unknown, VARIANTS};
use crate::protocol::registry::Registry;
use crate::protocol::server::Text;
use std::collections::HashSet;
use std::sync::Arc;

/// Mappings covering every compiled variant, identifiers assigned by
/// enumeration order.
fn full_mappings() -> PacketMappings {
    PacketMappings::from_pairs(VARIANTS.iter().enumerate().map(|(i, s)| (s.name, i as u8)))
}

fn build_dispatcher(mappings: &PacketMappings) -> (Dispatcher, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let registry = Registry::build(VARIANTS, mappings, sink.as_ref()).expect("build");
    (Dispatcher::new(Arc::new(registry), sink.clone()), sink)
}

#[test]
fn variant_names_are_unique() {
    let mut seen = HashSet::new();
    for spec in VARIANTS {
        assert!(seen.insert(spec.name), "duplicate variant name {}", spec.name);
    }
}

#[test]
fn every_variant_dispatches_to_its_own_kind() {
    let mappings = full_mappings();
    let (dispatcher, _) = build_dispatcher(&mappings);

    for spec in VARIANTS {
        let id = mappings.lookup(spec.name).unwrap();
        let packet = dispatcher.create(id);
        assert_eq!(packet.name(), spec.name, "identifier {id} dispatched wrong kind");
        assert!(!packet.is_unknown());
    }
}

#[test]
fn build_emits_one_mapping_established_per_variant() {
    let mappings = full_mappings();
    let (_, sink) = build_dispatcher(&mappings);

    let established = sink.filtered(|d| matches!(d, Diagnostic::MappingEstablished { .. }));
    assert_eq!(established.len(), VARIANTS.len());
    assert!(sink
        .filtered(|d| matches!(d, Diagnostic::MappingMissing { .. }))
        .is_empty());
}

#[test]
fn duplicate_identifier_is_a_build_error() {
    // every variant mapped to slot 0
    let mappings = PacketMappings::from_pairs(VARIANTS.iter().map(|s| (s.name, 0u8)));
    let sink = RecordingSink::new();
    let err = Registry::build(VARIANTS, &mappings, &sink).unwrap_err();
    assert!(matches!(err, ProtocolError::RegistryConflict { id: 0, .. }));
}

#[test]
fn unmapped_variant_is_a_build_error() {
    let sink = RecordingSink::new();
    let err = Registry::build(VARIANTS, &PacketMappings::default(), &sink).unwrap_err();
    assert!(matches!(err, ProtocolError::UnresolvedVariant(_)));
}

#[test]
fn out_of_range_identifier_is_a_build_error() {
    let mut pairs: Vec<(&str, u8)> = VARIANTS
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name, i as u8))
        .collect();
    pairs[0].1 = 127;
    let sink = RecordingSink::new();
    let err = Registry::build(VARIANTS, &PacketMappings::from_pairs(pairs), &sink).unwrap_err();
    assert!(matches!(err, ProtocolError::ConfigError(_)));
}

// Scenario: a mapping entry naming a kind this build does not compile is a
// coverage gap, reported once, without failing the build.
#[test]
fn stale_mapping_entry_reported_once() {
    let mut pairs: Vec<(String, u8)> = VARIANTS
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.to_string(), i as u8))
        .collect();
    pairs.push(("FUTUREPACKET".to_string(), 120));

    let sink = RecordingSink::new();
    let registry =
        Registry::build(VARIANTS, &PacketMappings::from_pairs(pairs), &sink).expect("build");

    let missing = sink.filtered(|d| matches!(d, Diagnostic::MappingMissing { .. }));
    assert_eq!(
        missing,
        vec![Diagnostic::MappingMissing {
            name: "FUTUREPACKET".to_string(),
            id: 120
        }]
    );
    assert!(registry.create(120).is_unknown());
}

#[test]
fn unregistered_identifier_yields_unknown_preserving_id() {
    let mappings = PacketMappings::from_pairs([("CREATEGUILD", 23u8)]);
    let variants = [VARIANTS
        .iter()
        .find(|s| s.name == "CREATEGUILD")
        .copied()
        .unwrap()];
    let sink = Arc::new(RecordingSink::new());
    let registry = Registry::build(&variants, &mappings, sink.as_ref()).expect("build");
    let dispatcher = Dispatcher::new(Arc::new(registry), sink);

    let packet = dispatcher
        .create_from_bytes(125, &[0xDE, 0xAD, 0xBE, 0xEF])
        .expect("unknown never fails");
    match &packet {
        Packet::Unknown(u) => {
            assert_eq!(u.id, 125);
            assert_eq!(u.raw, vec![0xDE, 0xAD, 0xBE, 0xEF]);
        }
        other => panic!("expected Unknown, got {other:?}"),
    }
    // verbatim pass-through on re-encode
    assert_eq!(packet.encode(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
}

#[test]
fn create_above_table_range_falls_back_to_unknown() {
    let (dispatcher, _) = build_dispatcher(&full_mappings());
    for id in [127u8, 128, 200, 255] {
        let packet = dispatcher.create(id);
        match packet {
            Packet::Unknown(u) => assert_eq!(u.id, id),
            other => panic!("expected Unknown for {id}, got {other:?}"),
        }
    }
}

#[test]
fn clean_decode_emits_no_drift() {
    let (dispatcher, sink) = build_dispatcher(&full_mappings());
    let id = dispatcher.registry().identifier_of("TEXT").unwrap();

    let mut w = PacketWriter::new();
    Text {
        name: "Bob".into(),
        object_id: 42,
        num_stars: 5,
        bubble_time: 10,
        recipient: String::new(),
        text: "hi".into(),
        clean_text: "hi".into(),
    }
    .encode(&mut w);
    let bytes = w.into_bytes();

    let packet = dispatcher.create_from_bytes(id, &bytes).expect("decode");
    assert_eq!(packet.name(), "TEXT");
    assert!(sink
        .filtered(|d| matches!(d, Diagnostic::DriftDetected { .. }))
        .is_empty());
}

// A payload with bytes the compiled layout does not know about (the upstream
// protocol grew a trailing field): decode succeeds, drift is reported.
#[test]
fn trailing_bytes_emit_drift_but_decode_succeeds() {
    let (dispatcher, sink) = build_dispatcher(&full_mappings());
    let id = dispatcher.registry().identifier_of("CREATEGUILD").unwrap();

    let mut w = PacketWriter::new();
    CreateGuild { name: "Foo".into() }.encode(&mut w);
    let mut bytes = w.into_bytes();
    bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]); // future trailing field

    let packet = dispatcher.create_from_bytes(id, &bytes).expect("decode");
    assert_eq!(packet.name(), "CREATEGUILD");

    let drift = sink.filtered(|d| matches!(d, Diagnostic::DriftDetected { .. }));
    assert_eq!(
        drift,
        vec![Diagnostic::DriftDetected {
            kind: "CREATEGUILD",
            wire_len: 9,
            reencoded_len: 5,
        }]
    );
}

#[test]
fn truncated_payload_propagates_format_error() {
    let (dispatcher, sink) = build_dispatcher(&full_mappings());
    let id = dispatcher.registry().identifier_of("TEXT").unwrap();

    // declared string length runs past the end of the payload
    let err = dispatcher.create_from_bytes(id, &[0x00, 0x40, b'x']).unwrap_err();
    assert!(matches!(err, ProtocolError::Format(_)));
    assert!(sink
        .filtered(|d| matches!(d, Diagnostic::DriftDetected { .. }))
        .is_empty());
}

#[test]
fn unknown_default_is_empty() {
    let u = Unknown::default();
    assert_eq!(u.id, 0);
    assert!(u.raw.is_empty());
    assert_eq!(Unknown::NAME, "UNKNOWN");
}

#[test]
fn registry_reports_size_and_iterates_in_id_order() {
    let mappings = full_mappings();
    let sink = RecordingSink::new();
    let registry = Registry::build(VARIANTS, &mappings, &sink).expect("build");

    assert_eq!(registry.len(), VARIANTS.len());
    assert!(!registry.is_empty());

    let ids: Vec<u8> = registry.iter().map(|slot| slot.id).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn packet_from_impl_and_name_agree() {
    let packet: Packet = CreateGuild { name: "Foo".into() }.into();
    assert_eq!(packet.name(), CreateGuild::NAME);
}
