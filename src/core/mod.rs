//! # Core Wire Components
//!
//! Byte-level reading/writing and stream framing.
//!
//! ## Components
//! - **Io**: checked big-endian reader/writer for packet payloads
//! - **Codec**: tokio codec for framing packets over byte streams
//!
//! ## Wire Format
//! ```text
//! [Length(4)] [Identifier(1)] [Payload(N)]
//! ```
//! Length is big-endian and counts the whole frame, header included.
//!
//! Within a payload: integers are fixed-width big-endian, strings are a
//! big-endian `u16` length prefix followed by UTF-8 bytes, long strings and
//! blobs use an `i32` length prefix. Length prefixes are validated against
//! the remaining input before any allocation.

pub mod codec;
pub mod io;
