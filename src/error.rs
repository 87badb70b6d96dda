//! # Error Types
//!
//! Error handling for the relay packet codec.
//!
//! Two layers, matching who can act on them:
//! - **[`FormatError`]**: a payload could not be decoded (truncated input,
//!   length prefix past the end of the buffer, bad UTF-8). Propagated to the
//!   relay, which decides whether to drop the packet or the connection.
//! - **[`ProtocolError`]**: everything the crate can fail with, including
//!   registry build defects ([`ProtocolError::RegistryConflict`],
//!   [`ProtocolError::UnresolvedVariant`]) which halt startup rather than
//!   silently mis-populate the dispatch table.
//!
//! Codec drift (re-encoded length differs from the wire length) is *not* an
//! error; it is reported through the diagnostic sink and decoding still
//! succeeds.

use std::io;
use thiserror::Error;

/// A payload failed to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("truncated payload: needed {needed} more byte(s), {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("declared length {declared} exceeds {remaining} remaining byte(s)")]
    LengthOverrun { declared: usize, remaining: usize },

    #[error("negative length prefix {0}")]
    NegativeLength(i32),

    #[error("string field is not valid UTF-8")]
    InvalidUtf8,
}

// ProtocolError is the primary error type for all relay codec operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("format error: {0}")]
    Format(#[from] FormatError),

    #[error("registry conflict: variants {existing} and {incoming} both claim identifier {id}")]
    RegistryConflict {
        id: u8,
        existing: &'static str,
        incoming: &'static str,
    },

    #[error("variant {0} has no identifier in the packet mappings")]
    UnresolvedVariant(&'static str),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("frame too large: {0} bytes")]
    OversizedFrame(usize),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
