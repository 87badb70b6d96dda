#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Hostile and boundary payloads: decoding must fail cleanly with
//! `FormatError`, never panic, and never reject traffic it can pass through.

use relay_protocol::config::PacketMappings;
use relay_protocol::error::{FormatError, ProtocolError};
use relay_protocol::protocol::diagnostics::RecordingSink;
use relay_protocol::protocol::dispatcher::Dispatcher;
use relay_protocol::protocol::packet::{Packet, VARIANTS};
use relay_protocol::protocol::registry::Registry;
use std::sync::Arc;

fn build() -> (Dispatcher, PacketMappings) {
    let mappings =
        PacketMappings::from_pairs(VARIANTS.iter().enumerate().map(|(i, s)| (s.name, i as u8)));
    let sink = Arc::new(RecordingSink::new());
    let registry = Registry::build(VARIANTS, &mappings, sink.as_ref()).expect("build");
    (Dispatcher::new(Arc::new(registry), sink), mappings)
}

// ============================================================================
// TRUNCATION
// ============================================================================

#[test]
fn every_kind_survives_truncated_garbage() {
    let (dispatcher, _) = build();
    let garbage = [0xFFu8; 64];

    for spec in VARIANTS {
        let id = dispatcher.registry().identifier_of(spec.name).unwrap();
        // every prefix of a garbage buffer: decode must return, not panic
        for len in 0..garbage.len() {
            let _ = dispatcher.create_from_bytes(id, &garbage[..len]);
        }
    }
}

#[test]
fn truncated_string_reports_overrun() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("CHOOSENAME").unwrap();

    // declared length 0x4142 with 2 bytes of data
    let err = dispatcher
        .create_from_bytes(id, &[0x41, 0x42, b'h', b'i'])
        .unwrap_err();
    match err {
        ProtocolError::Format(FormatError::LengthOverrun {
            declared: 0x4142,
            remaining: 2,
        }) => {}
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn truncated_integer_reports_missing_bytes() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("PING").unwrap();

    let err = dispatcher.create_from_bytes(id, &[0x00, 0x01]).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Format(FormatError::Truncated { .. })
    ));
}

#[test]
fn empty_payload_fails_for_field_bearing_kinds() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("TEXT").unwrap();
    assert!(dispatcher.create_from_bytes(id, &[]).is_err());
}

// ============================================================================
// HOSTILE LENGTH PREFIXES
// ============================================================================

#[test]
fn bitmap_with_huge_declared_length_rejected_without_allocation() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("PIC").unwrap();

    let mut payload = Vec::new();
    payload.extend_from_slice(&16i32.to_be_bytes()); // width
    payload.extend_from_slice(&16i32.to_be_bytes()); // height
    payload.extend_from_slice(&i32::MAX.to_be_bytes()); // claimed byte count
    payload.extend_from_slice(&[0xAB; 8]);

    let err = dispatcher.create_from_bytes(id, &payload).unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Format(FormatError::LengthOverrun { .. })
    ));
}

#[test]
fn negative_blob_length_rejected() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("FILE").unwrap();

    let mut payload = vec![0x00, 0x04, b'a', b'.', b't', b'x'];
    payload.extend_from_slice(&(-5i32).to_be_bytes());
    assert!(dispatcher.create_from_bytes(id, &payload).is_err());
}

#[test]
fn invalid_utf8_in_string_field_rejected() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("PLAYERTEXT").unwrap();

    let err = dispatcher
        .create_from_bytes(id, &[0x00, 0x02, 0xC0, 0x80])
        .unwrap_err();
    assert!(matches!(
        err,
        ProtocolError::Format(FormatError::InvalidUtf8)
    ));
}

#[test]
fn stat_list_count_larger_than_payload_rejected() {
    let (dispatcher, _) = build();
    let id = dispatcher.registry().identifier_of("NEW_TICK").unwrap();

    let mut payload = Vec::new();
    payload.extend_from_slice(&1i32.to_be_bytes()); // tickId
    payload.extend_from_slice(&1i32.to_be_bytes()); // tickTime
    payload.extend_from_slice(&u16::MAX.to_be_bytes()); // status count
    assert!(dispatcher.create_from_bytes(id, &payload).is_err());
}

// ============================================================================
// UNKNOWN PASS-THROUGH
// ============================================================================

#[test]
fn unknown_identifier_never_fails_regardless_of_payload() {
    let (dispatcher, mappings) = build();
    let unused = (0u8..=126).find(|id| {
        mappings
            .iter()
            .all(|(_, mapped)| mapped != *id)
    })
    .expect("an unused identifier exists");

    for payload in [&[][..], &[0xFF; 3][..], &[0x00; 1024][..]] {
        let packet = dispatcher
            .create_from_bytes(unused, payload)
            .expect("unknown id never fails");
        match &packet {
            Packet::Unknown(u) => {
                assert_eq!(u.id, unused);
                assert_eq!(u.raw, payload);
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
        assert_eq!(packet.encode(), payload);
    }
}
