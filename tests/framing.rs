#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! End-to-end through the socket framing: frames written by one endpoint
//! arrive intact at the other and dispatch to typed packets.

use futures::{SinkExt, StreamExt};
use relay_protocol::config::PacketMappings;
use relay_protocol::core::codec::{Frame, RelayCodec};
use relay_protocol::core::io::PacketWriter;
use relay_protocol::protocol::diagnostics::TracingSink;
use relay_protocol::protocol::dispatcher::Dispatcher;
use relay_protocol::protocol::packet::{Packet, PacketBody, VARIANTS};
use relay_protocol::protocol::registry::Registry;
use relay_protocol::protocol::server::Text;
use std::sync::Arc;
use tokio_util::codec::Framed;

fn build_dispatcher() -> Dispatcher {
    let mappings =
        PacketMappings::from_pairs(VARIANTS.iter().enumerate().map(|(i, s)| (s.name, i as u8)));
    let sink = Arc::new(TracingSink);
    let registry = Arc::new(Registry::build(VARIANTS, &mappings, sink.as_ref()).expect("build"));
    Dispatcher::new(registry, sink)
}

#[tokio::test]
async fn framed_stream_dispatches_to_typed_packets() {
    let dispatcher = build_dispatcher();
    let (client, server) = tokio::io::duplex(4096);
    let mut client = Framed::new(client, RelayCodec);
    let mut server = Framed::new(server, RelayCodec);

    let text_id = dispatcher.registry().identifier_of("TEXT").unwrap();
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
    let payload = w.into_bytes();

    client
        .send(Frame::new(text_id, payload.clone()))
        .await
        .expect("send");

    let frame = server.next().await.expect("frame").expect("decode frame");
    assert_eq!(frame.id, text_id);
    assert_eq!(&frame.payload[..], &payload[..]);

    let packet = dispatcher
        .create_from_bytes(frame.id, &frame.payload)
        .expect("dispatch");
    match packet {
        Packet::Text(t) => assert_eq!(t.name, "Bob"),
        other => panic!("expected Text, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_traffic_forwards_verbatim() {
    let dispatcher = build_dispatcher();
    let (client, server) = tokio::io::duplex(4096);
    let mut upstream = Framed::new(client, RelayCodec);
    let mut relay_side = Framed::new(server, RelayCodec);

    // traffic the codec has no variant for
    let raw = vec![0xDE, 0xAD, 0xBE, 0xEF];
    upstream
        .send(Frame::new(125, raw.clone()))
        .await
        .expect("send");

    let frame = relay_side.next().await.expect("frame").expect("decode");
    let packet = dispatcher
        .create_from_bytes(frame.id, &frame.payload)
        .expect("unknown never fails");
    assert!(packet.is_unknown());

    // relay re-emits the packet untouched
    relay_side
        .send(Frame::new(frame.id, packet.encode()))
        .await
        .expect("re-emit");
    let echoed = upstream.next().await.expect("frame").expect("decode");
    assert_eq!(echoed.id, 125);
    assert_eq!(&echoed.payload[..], &raw[..]);
}

#[tokio::test]
async fn back_to_back_frames_preserve_order() {
    let (client, server) = tokio::io::duplex(4096);
    let mut tx = Framed::new(client, RelayCodec);
    let mut rx = Framed::new(server, RelayCodec);

    for i in 0..32u8 {
        tx.send(Frame::new(i, vec![i; i as usize])).await.expect("send");
    }
    for i in 0..32u8 {
        let frame = rx.next().await.expect("frame").expect("decode");
        assert_eq!(frame.id, i);
        assert_eq!(frame.payload.len(), i as usize);
    }
}
