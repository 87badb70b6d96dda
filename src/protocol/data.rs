//! Nested wire structures shared by packet payloads.
//!
//! These are the sub-records embedded inside packets: positions, inventory
//! slots, entity status blocks, trade offers, the bitmap blob carried by
//! `PIC`. Each implements [`Wire`] and round-trips exactly.

use crate::core::io::{PacketReader, PacketWriter};
use crate::error::FormatError;

/// Decode/encode pair for anything embedded in a payload.
pub trait Wire: Sized {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError>;
    fn encode(&self, w: &mut PacketWriter);
}

/// Position in world coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl Wire for WorldPos {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            x: r.read_f32()?,
            y: r.read_f32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_f32(self.x);
        w.write_f32(self.y);
    }
}

/// One inventory slot reference: owner, slot index, item type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotObject {
    pub object_id: i32,
    pub slot_id: i32,
    pub object_type: i32,
}

impl Wire for SlotObject {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
            slot_id: r.read_i32()?,
            object_type: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
        w.write_i32(self.slot_id);
        w.write_i32(self.object_type);
    }
}

/// Stat identifiers whose value is a string on the wire rather than an i32.
const STRING_STAT_IDS: [u8; 2] = [31, 62]; // NAME, GUILD_NAME

/// A stat value: most stats are integers, a handful (names) are strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    Int(i32),
    Str(String),
}

impl Default for StatValue {
    fn default() -> Self {
        StatValue::Int(0)
    }
}

/// One `stat_type`/value pair inside an entity status block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatData {
    pub stat_type: u8,
    pub value: StatValue,
}

impl StatData {
    pub fn is_string_stat(stat_type: u8) -> bool {
        STRING_STAT_IDS.contains(&stat_type)
    }
}

impl Wire for StatData {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        let stat_type = r.read_u8()?;
        let value = if Self::is_string_stat(stat_type) {
            StatValue::Str(r.read_string()?)
        } else {
            StatValue::Int(r.read_i32()?)
        };
        Ok(Self { stat_type, value })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.stat_type);
        match &self.value {
            StatValue::Str(s) => w.write_string(s),
            StatValue::Int(v) => w.write_i32(*v),
        }
    }
}

/// Position and stats of one entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectStatus {
    pub object_id: i32,
    pub pos: WorldPos,
    pub stats: Vec<StatData>,
}

impl Wire for ObjectStatus {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        let object_id = r.read_i32()?;
        let pos = WorldPos::decode(r)?;
        let count = r.read_u16()? as usize;
        let mut stats = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            stats.push(StatData::decode(r)?);
        }
        Ok(Self {
            object_id,
            pos,
            stats,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
        self.pos.encode(w);
        w.write_u16(self.stats.len() as u16);
        for stat in &self.stats {
            stat.encode(w);
        }
    }
}

/// A newly visible entity: its type plus full status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectData {
    pub object_type: u16,
    pub status: ObjectStatus,
}

impl Wire for ObjectData {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_type: r.read_u16()?,
            status: ObjectStatus::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u16(self.object_type);
        self.status.encode(w);
    }
}

/// One sample of the client's movement history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveRecord {
    pub time: i32,
    pub x: f32,
    pub y: f32,
}

impl Wire for MoveRecord {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            x: r.read_f32()?,
            y: r.read_f32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        w.write_f32(self.x);
        w.write_f32(self.y);
    }
}

/// Map tile update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundTile {
    pub x: i16,
    pub y: i16,
    pub tile_type: u16,
}

impl Wire for GroundTile {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            x: r.read_i16()?,
            y: r.read_i16()?,
            tile_type: r.read_u16()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i16(self.x);
        w.write_i16(self.y);
        w.write_u16(self.tile_type);
    }
}

/// One item on a trade screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TradeItem {
    pub item: i32,
    pub slot_type: i32,
    pub tradeable: bool,
    pub included: bool,
}

impl Wire for TradeItem {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            item: r.read_i32()?,
            slot_type: r.read_i32()?,
            tradeable: r.read_bool()?,
            included: r.read_bool()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.item);
        w.write_i32(self.slot_type);
        w.write_bool(self.tradeable);
        w.write_bool(self.included);
    }
}

/// Image blob carried by `PIC`. The pixel format is opaque to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    pub width: i32,
    pub height: i32,
    pub bytes: Vec<u8>,
}

impl Wire for Bitmap {
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            width: r.read_i32()?,
            height: r.read_i32()?,
            bytes: r.read_long_bytes()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.width);
        w.write_i32(self.height);
        w.write_long_bytes(&self.bytes);
    }
}

/// Decode a `u16`-counted list of wire values.
pub fn decode_list<T: Wire>(r: &mut PacketReader<'_>) -> Result<Vec<T>, FormatError> {
    let count = r.read_u16()? as usize;
    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        items.push(T::decode(r)?);
    }
    Ok(items)
}

/// Encode a `u16`-counted list of wire values.
pub fn encode_list<T: Wire>(items: &[T], w: &mut PacketWriter) {
    w.write_u16(items.len() as u16);
    for item in items {
        item.encode(w);
    }
}

/// Decode a `u16`-counted list of booleans (trade offer masks).
pub fn decode_bool_list(r: &mut PacketReader<'_>) -> Result<Vec<bool>, FormatError> {
    let count = r.read_u16()? as usize;
    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        items.push(r.read_bool()?);
    }
    Ok(items)
}

/// Encode a `u16`-counted list of booleans.
pub fn encode_bool_list(items: &[bool], w: &mut PacketWriter) {
    w.write_u16(items.len() as u16);
    for item in items {
        w.write_bool(*item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Wire + PartialEq + std::fmt::Debug>(value: &T) {
        let mut w = PacketWriter::new();
        value.encode(&mut w);
        let bytes = w.into_bytes();
        let mut r = PacketReader::new(&bytes);
        let decoded = T::decode(&mut r).expect("decode");
        assert_eq!(&decoded, value);
        assert!(r.is_empty(), "trailing bytes after {value:?}");
    }

    #[test]
    fn status_with_mixed_stats_roundtrips() {
        roundtrip(&ObjectStatus {
            object_id: 99,
            pos: WorldPos { x: 12.5, y: -3.0 },
            stats: vec![
                StatData {
                    stat_type: 0,
                    value: StatValue::Int(670),
                },
                StatData {
                    stat_type: 31,
                    value: StatValue::Str("Bob".into()),
                },
                StatData {
                    stat_type: 62,
                    value: StatValue::Str("Knights".into()),
                },
            ],
        });
    }

    #[test]
    fn string_stats_are_exactly_name_and_guild() {
        assert!(StatData::is_string_stat(31));
        assert!(StatData::is_string_stat(62));
        assert!(!StatData::is_string_stat(0));
        assert!(!StatData::is_string_stat(30));
    }

    #[test]
    fn bitmap_roundtrips() {
        roundtrip(&Bitmap {
            width: 8,
            height: 8,
            bytes: vec![0xDE; 256],
        });
    }

    #[test]
    fn trade_item_roundtrips() {
        roundtrip(&TradeItem {
            item: 2648,
            slot_type: 10,
            tradeable: true,
            included: false,
        });
    }

    #[test]
    fn truncated_status_fails() {
        let mut w = PacketWriter::new();
        ObjectStatus {
            object_id: 1,
            pos: WorldPos::default(),
            stats: vec![StatData::default()],
        }
        .encode(&mut w);
        let bytes = w.into_bytes();
        let mut r = PacketReader::new(&bytes[..bytes.len() - 2]);
        assert!(ObjectStatus::decode(&mut r).is_err());
    }
}
