//! Stream framing for relay sockets.
//!
//! Each frame on the wire is `[u32 length][u8 id][payload]`, length counting
//! the whole frame including its own four bytes and the identifier byte.
//! [`RelayCodec`] splits a byte stream into [`Frame`]s and writes them back
//! out; what the payload *means* is the registry/dispatcher's business.

use crate::error::ProtocolError;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Length field plus identifier byte.
pub const FRAME_HEADER_LEN: usize = 5;

/// Upper bound on a single frame. Anything larger is a corrupt stream or an
/// attack, not game traffic.
pub const MAX_FRAME_LEN: usize = 2 * 1024 * 1024;

/// One packet as framed on the socket: identifier byte plus raw payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub id: u8,
    pub payload: Bytes,
}

impl Frame {
    pub fn new(id: u8, payload: impl Into<Bytes>) -> Self {
        Self {
            id,
            payload: payload.into(),
        }
    }
}

/// Tokio codec for relay frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelayCodec;

impl Decoder for RelayCodec {
    type Item = Frame;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>, ProtocolError> {
        if src.len() < 4 {
            return Ok(None);
        }

        let declared = u32::from_be_bytes([src[0], src[1], src[2], src[3]]) as usize;
        if declared < FRAME_HEADER_LEN || declared > MAX_FRAME_LEN {
            return Err(ProtocolError::OversizedFrame(declared));
        }
        if src.len() < declared {
            src.reserve(declared - src.len());
            return Ok(None);
        }

        src.advance(4);
        let id = src.get_u8();
        let payload = src.split_to(declared - FRAME_HEADER_LEN).freeze();
        Ok(Some(Frame { id, payload }))
    }
}

impl Encoder<Frame> for RelayCodec {
    type Error = ProtocolError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<(), ProtocolError> {
        let total = FRAME_HEADER_LEN + frame.payload.len();
        if total > MAX_FRAME_LEN {
            return Err(ProtocolError::OversizedFrame(total));
        }
        dst.reserve(total);
        dst.put_u32(total as u32);
        dst.put_u8(frame.id);
        dst.put_slice(&frame.payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_roundtrip() {
        let mut codec = RelayCodec;
        let mut buf = BytesMut::new();
        let frame = Frame::new(23, vec![0x00, 0x03, b'F', b'o', b'o']);

        codec.encode(frame.clone(), &mut buf).unwrap();
        assert_eq!(&buf[..4], &10u32.to_be_bytes());
        assert_eq!(buf[4], 23);

        let decoded = codec.decode(&mut buf).unwrap().expect("complete frame");
        assert_eq!(decoded, frame);
        assert!(buf.is_empty());
    }

    #[test]
    fn partial_frame_waits_for_more_bytes() {
        let mut codec = RelayCodec;
        let mut buf = BytesMut::new();
        codec.encode(Frame::new(7, vec![1, 2, 3, 4]), &mut buf).unwrap();

        let mut partial = BytesMut::from(&buf[..6]);
        assert!(codec.decode(&mut partial).unwrap().is_none());

        partial.extend_from_slice(&buf[6..]);
        let frame = codec.decode(&mut partial).unwrap().expect("now complete");
        assert_eq!(frame.id, 7);
        assert_eq!(&frame.payload[..], &[1, 2, 3, 4]);
    }

    #[test]
    fn undersized_length_rejected() {
        let mut codec = RelayCodec;
        // a frame can never be shorter than its own header
        let mut buf = BytesMut::from(&3u32.to_be_bytes()[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(ProtocolError::OversizedFrame(3))
        ));
    }

    #[test]
    fn oversized_length_rejected() {
        let mut codec = RelayCodec;
        let mut buf = BytesMut::from(&(MAX_FRAME_LEN as u32 + 1).to_be_bytes()[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(ProtocolError::OversizedFrame(_))
        ));
    }

    #[test]
    fn empty_payload_frame() {
        let mut codec = RelayCodec;
        let mut buf = BytesMut::new();
        codec.encode(Frame::new(0, Vec::new()), &mut buf).unwrap();
        let frame = codec.decode(&mut buf).unwrap().expect("frame");
        assert_eq!(frame.id, 0);
        assert!(frame.payload.is_empty());
    }
}
