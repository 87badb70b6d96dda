//! # Packet Mappings
//!
//! The external name ↔ identifier table consumed by registry build.
//!
//! Identifiers are assigned by the upstream game, not by this crate; the
//! relay operator ships a mappings file alongside the binary and updates it
//! when the game reassigns identifiers. The registry consumes the table
//! read-only.
//!
//! ## File format
//! ```toml
//! [packets]
//! HELLO = 74
//! CREATEGUILD = 23
//! TEXT = 20
//! ```
//!
//! Validation follows the protocol's conventions: identifiers live in
//! `0..=126` and no two names may share an identifier.

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Highest identifier the wire protocol assigns.
pub const MAX_PACKET_ID: u8 = 126;

/// External name → identifier mapping, read-only after load.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PacketMappings {
    #[serde(default)]
    packets: BTreeMap<String, u8>,
}

impl PacketMappings {
    /// Load mappings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ProtocolError::ConfigError(format!("failed to read mappings file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load mappings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| ProtocolError::ConfigError(format!("failed to parse mappings: {e}")))
    }

    /// Build mappings directly from `(name, id)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        Self {
            packets: pairs.into_iter().map(|(n, id)| (n.into(), id)).collect(),
        }
    }

    /// Resolve a packet name to its assigned identifier.
    pub fn lookup(&self, name: &str) -> Option<u8> {
        self.packets.get(name).copied()
    }

    /// Iterate all `(name, id)` entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.packets.iter().map(|(n, id)| (n.as_str(), *id))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Validate the mappings for common issues.
    ///
    /// Returns a list of validation errors. Empty list means the table is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut claimed: BTreeMap<u8, &str> = BTreeMap::new();

        for (name, id) in self.iter() {
            if name.is_empty() {
                errors.push("packet name cannot be empty".to_string());
            } else if name.chars().any(|c| c.is_ascii_lowercase()) {
                errors.push(format!("packet name '{name}' must be uppercase"));
            }

            if id > MAX_PACKET_ID {
                errors.push(format!(
                    "identifier {id} for '{name}' outside valid range 0..={MAX_PACKET_ID}"
                ));
            }

            if let Some(other) = claimed.insert(id, name) {
                errors.push(format!(
                    "identifier {id} assigned to both '{other}' and '{name}'"
                ));
            }
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ProtocolError::ConfigError(format!(
                "mapping validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_table() {
        let mappings = PacketMappings::from_toml(
            r#"
            [packets]
            CREATEGUILD = 23
            TEXT = 20
            "#,
        )
        .expect("valid toml");
        assert_eq!(mappings.lookup("CREATEGUILD"), Some(23));
        assert_eq!(mappings.lookup("TEXT"), Some(20));
        assert_eq!(mappings.lookup("NOPE"), None);
        assert_eq!(mappings.len(), 2);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(PacketMappings::from_toml("[packets\nX = 1").is_err());
    }

    #[test]
    fn validate_flags_out_of_range_ids() {
        let mappings = PacketMappings::from_pairs([("HELLO", 127u8)]);
        let errors = mappings.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("outside valid range"));
    }

    #[test]
    fn validate_flags_duplicate_ids() {
        let mappings = PacketMappings::from_pairs([("PING", 8u8), ("PONG", 8u8)]);
        let errors = mappings.validate();
        assert!(errors.iter().any(|e| e.contains("assigned to both")));
        assert!(mappings.validate_strict().is_err());
    }

    #[test]
    fn validate_accepts_clean_table() {
        let mappings = PacketMappings::from_pairs([("PING", 8u8), ("PONG", 9u8)]);
        assert!(mappings.validate().is_empty());
        assert!(mappings.validate_strict().is_ok());
    }
}
