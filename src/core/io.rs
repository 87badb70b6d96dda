//! Checked payload reader/writer.
//!
//! [`PacketReader`] walks a borrowed payload slice; every read verifies the
//! remaining length first and fails with [`FormatError`] instead of
//! panicking, so hostile payloads can never take the relay down.
//! [`PacketWriter`] is the mirror image over a [`BytesMut`].
//!
//! Primitives match the upstream game protocol: fixed-width big-endian
//! integers, booleans as a single byte, strings as a `u16` length prefix plus
//! UTF-8, long strings and byte blobs with an `i32` length prefix.

use crate::error::FormatError;
use bytes::{BufMut, BytesMut};

/// Cursor over a packet payload. Reads advance; nothing is copied until a
/// field is materialized.
#[derive(Debug)]
pub struct PacketReader<'a> {
    buf: &'a [u8],
}

impl<'a> PacketReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], FormatError> {
        if self.buf.len() < n {
            return Err(FormatError::Truncated {
                needed: n - self.buf.len(),
                remaining: self.buf.len(),
            });
        }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    pub fn read_u8(&mut self) -> Result<u8, FormatError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_bool(&mut self) -> Result<bool, FormatError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i16(&mut self) -> Result<i16, FormatError> {
        let b = self.take(2)?;
        Ok(i16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_u16(&mut self) -> Result<u16, FormatError> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, FormatError> {
        let b = self.take(4)?;
        Ok(i32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_f32(&mut self) -> Result<f32, FormatError> {
        let b = self.take(4)?;
        Ok(f32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Length-checked raw byte run.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], FormatError> {
        if self.buf.len() < len {
            return Err(FormatError::LengthOverrun {
                declared: len,
                remaining: self.buf.len(),
            });
        }
        self.take(len)
    }

    /// `u16` length prefix + UTF-8 bytes.
    pub fn read_string(&mut self) -> Result<String, FormatError> {
        let len = self.read_u16()? as usize;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| FormatError::InvalidUtf8)
    }

    /// `i32` length prefix + UTF-8 bytes, for oversized text fields.
    pub fn read_long_string(&mut self) -> Result<String, FormatError> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(FormatError::NegativeLength(len));
        }
        let bytes = self.read_bytes(len as usize)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| FormatError::InvalidUtf8)
    }

    /// `i32` length prefix + raw bytes.
    pub fn read_long_bytes(&mut self) -> Result<Vec<u8>, FormatError> {
        let len = self.read_i32()?;
        if len < 0 {
            return Err(FormatError::NegativeLength(len));
        }
        Ok(self.read_bytes(len as usize)?.to_vec())
    }

    /// Everything left in the payload.
    pub fn read_to_end(&mut self) -> Vec<u8> {
        let rest = self.buf;
        self.buf = &[];
        rest.to_vec()
    }
}

/// Growable payload writer. Encoding is infallible; field values were either
/// decoded from the wire or constructed in-process, both within range.
#[derive(Debug, Default)]
pub struct PacketWriter {
    buf: BytesMut,
}

impl PacketWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf.to_vec()
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.put_u8(v);
    }

    pub fn write_bool(&mut self, v: bool) {
        self.buf.put_u8(u8::from(v));
    }

    pub fn write_i16(&mut self, v: i16) {
        self.buf.put_i16(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.put_u16(v);
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buf.put_i32(v);
    }

    pub fn write_f32(&mut self, v: f32) {
        self.buf.put_f32(v);
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.buf.put_slice(v);
    }

    /// `u16` length prefix + UTF-8 bytes. Strings longer than `u16::MAX`
    /// bytes cannot appear on this wire; debug builds assert.
    pub fn write_string(&mut self, v: &str) {
        debug_assert!(v.len() <= u16::MAX as usize);
        self.buf.put_u16(v.len() as u16);
        self.buf.put_slice(v.as_bytes());
    }

    /// `i32` length prefix + UTF-8 bytes.
    pub fn write_long_string(&mut self, v: &str) {
        self.buf.put_i32(v.len() as i32);
        self.buf.put_slice(v.as_bytes());
    }

    /// `i32` length prefix + raw bytes.
    pub fn write_long_bytes(&mut self, v: &[u8]) {
        self.buf.put_i32(v.len() as i32);
        self.buf.put_slice(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_roundtrip() {
        let mut w = PacketWriter::new();
        w.write_u8(0xAB);
        w.write_bool(true);
        w.write_i16(-2);
        w.write_u16(65535);
        w.write_i32(-100_000);
        w.write_f32(1.5);
        w.write_string("héllo");

        let bytes = w.into_bytes();
        let mut r = PacketReader::new(&bytes);
        assert_eq!(r.read_u8().unwrap(), 0xAB);
        assert!(r.read_bool().unwrap());
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_u16().unwrap(), 65535);
        assert_eq!(r.read_i32().unwrap(), -100_000);
        assert_eq!(r.read_f32().unwrap(), 1.5);
        assert_eq!(r.read_string().unwrap(), "héllo");
        assert!(r.is_empty());
    }

    #[test]
    fn strings_are_big_endian_u16_prefixed() {
        let mut w = PacketWriter::new();
        w.write_string("Foo");
        assert_eq!(w.into_bytes(), vec![0x00, 0x03, b'F', b'o', b'o']);
    }

    #[test]
    fn truncated_integer_fails() {
        let mut r = PacketReader::new(&[0x01, 0x02]);
        assert_eq!(
            r.read_i32(),
            Err(FormatError::Truncated {
                needed: 2,
                remaining: 2
            })
        );
    }

    #[test]
    fn string_length_past_end_fails() {
        // declared length 10, only 2 bytes follow
        let mut r = PacketReader::new(&[0x00, 0x0A, b'h', b'i']);
        assert_eq!(
            r.read_string(),
            Err(FormatError::LengthOverrun {
                declared: 10,
                remaining: 2
            })
        );
    }

    #[test]
    fn negative_long_length_fails() {
        let bytes = (-1i32).to_be_bytes();
        let mut r = PacketReader::new(&bytes);
        assert_eq!(r.read_long_bytes(), Err(FormatError::NegativeLength(-1)));
    }

    #[test]
    fn invalid_utf8_fails() {
        let mut r = PacketReader::new(&[0x00, 0x02, 0xFF, 0xFE]);
        assert_eq!(r.read_string(), Err(FormatError::InvalidUtf8));
    }

    #[test]
    fn read_to_end_drains() {
        let mut r = PacketReader::new(&[1, 2, 3]);
        assert_eq!(r.read_u8().unwrap(), 1);
        assert_eq!(r.read_to_end(), vec![2, 3]);
        assert!(r.is_empty());
    }
}
