//! Client → server packet kinds.
//!
//! Flat field structs with mechanical [`PacketBody`] impls; fields appear in
//! the exact order they occupy on the wire.

use crate::core::io::{PacketReader, PacketWriter};
use crate::error::FormatError;
use crate::protocol::data::{
    decode_bool_list, decode_list, encode_bool_list, encode_list, MoveRecord, SlotObject, Wire,
    WorldPos,
};
use crate::protocol::packet::PacketBody;

/// `ACCEPTTRADE` — both offer masks as the client last saw them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptTrade {
    pub my_offers: Vec<bool>,
    pub your_offers: Vec<bool>,
}

impl PacketBody for AcceptTrade {
    const NAME: &'static str = "ACCEPTTRADE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            my_offers: decode_bool_list(r)?,
            your_offers: decode_bool_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        encode_bool_list(&self.my_offers, w);
        encode_bool_list(&self.your_offers, w);
    }
}

/// `AOEACK` — acknowledges an area-of-effect hit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AoeAck {
    pub time: i32,
    pub position: WorldPos,
}

impl PacketBody for AoeAck {
    const NAME: &'static str = "AOEACK";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            position: WorldPos::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        self.position.encode(w);
    }
}

/// `BUY`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buy {
    pub object_id: i32,
}

impl PacketBody for Buy {
    const NAME: &'static str = "BUY";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
    }
}

/// `CANCELTRADE` — no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelTrade;

impl PacketBody for CancelTrade {
    const NAME: &'static str = "CANCELTRADE";

    fn decode(_r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self)
    }

    fn encode(&self, _w: &mut PacketWriter) {}
}

/// `CHANGEGUILDRANK`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeGuildRank {
    pub name: String,
    pub guild_rank: i32,
}

impl PacketBody for ChangeGuildRank {
    const NAME: &'static str = "CHANGEGUILDRANK";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
            guild_rank: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
        w.write_i32(self.guild_rank);
    }
}

/// `CHANGETRADE` — the client's updated offer mask.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeTrade {
    pub offers: Vec<bool>,
}

impl PacketBody for ChangeTrade {
    const NAME: &'static str = "CHANGETRADE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            offers: decode_bool_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        encode_bool_list(&self.offers, w);
    }
}

/// `CHECKCREDITS` — no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckCredits;

impl PacketBody for CheckCredits {
    const NAME: &'static str = "CHECKCREDITS";

    fn decode(_r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self)
    }

    fn encode(&self, _w: &mut PacketWriter) {}
}

/// `CHOOSENAME`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChooseName {
    pub name: String,
}

impl PacketBody for ChooseName {
    const NAME: &'static str = "CHOOSENAME";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
    }
}

/// `CREATE` — character creation with the chosen class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Create {
    pub class_type: u16,
}

impl PacketBody for Create {
    const NAME: &'static str = "CREATE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            class_type: r.read_u16()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u16(self.class_type);
    }
}

/// `CREATEGUILD` — client asks to found a guild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateGuild {
    pub name: String,
}

impl PacketBody for CreateGuild {
    const NAME: &'static str = "CREATEGUILD";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
    }
}

/// `EDITACCOUNTLIST` — add/remove a player on the lock or ignore list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditAccountList {
    pub account_list_id: i32,
    pub add: bool,
    pub object_id: i32,
}

impl PacketBody for EditAccountList {
    const NAME: &'static str = "EDITACCOUNTLIST";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            account_list_id: r.read_i32()?,
            add: r.read_bool()?,
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.account_list_id);
        w.write_bool(self.add);
        w.write_i32(self.object_id);
    }
}

/// `ENEMYHIT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnemyHit {
    pub time: i32,
    pub bullet_id: u8,
    pub target_id: i32,
    pub kill: bool,
}

impl PacketBody for EnemyHit {
    const NAME: &'static str = "ENEMYHIT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            bullet_id: r.read_u8()?,
            target_id: r.read_i32()?,
            kill: r.read_bool()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        w.write_u8(self.bullet_id);
        w.write_i32(self.target_id);
        w.write_bool(self.kill);
    }
}

/// `ESCAPE` — return to the nexus; no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Escape;

impl PacketBody for Escape {
    const NAME: &'static str = "ESCAPE";

    fn decode(_r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self)
    }

    fn encode(&self, _w: &mut PacketWriter) {}
}

/// `GOTOACK`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GotoAck {
    pub time: i32,
}

impl PacketBody for GotoAck {
    const NAME: &'static str = "GOTOACK";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
    }
}

/// `GROUNDDAMAGE`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundDamage {
    pub time: i32,
    pub position: WorldPos,
}

impl PacketBody for GroundDamage {
    const NAME: &'static str = "GROUNDDAMAGE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            position: WorldPos::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        self.position.encode(w);
    }
}

/// `GUILDINVITE`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildInvite {
    pub name: String,
}

impl PacketBody for GuildInvite {
    const NAME: &'static str = "GUILDINVITE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
    }
}

/// `GUILDREMOVE`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildRemove {
    pub name: String,
}

impl PacketBody for GuildRemove {
    const NAME: &'static str = "GUILDREMOVE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
    }
}

/// `HELLO` — the connection opener carrying credentials and the map blob.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hello {
    pub build_version: String,
    pub game_id: i32,
    pub guid: String,
    pub password: String,
    pub secret: String,
    pub key_time: i32,
    pub key: Vec<u8>,
    pub map_json: String,
}

impl PacketBody for Hello {
    const NAME: &'static str = "HELLO";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            build_version: r.read_string()?,
            game_id: r.read_i32()?,
            guid: r.read_string()?,
            password: r.read_string()?,
            secret: r.read_string()?,
            key_time: r.read_i32()?,
            key: {
                let len = r.read_u16()? as usize;
                r.read_bytes(len)?.to_vec()
            },
            map_json: r.read_long_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.build_version);
        w.write_i32(self.game_id);
        w.write_string(&self.guid);
        w.write_string(&self.password);
        w.write_string(&self.secret);
        w.write_i32(self.key_time);
        w.write_u16(self.key.len() as u16);
        w.write_bytes(&self.key);
        w.write_long_string(&self.map_json);
    }
}

/// `INVDROP`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvDrop {
    pub slot: SlotObject,
}

impl PacketBody for InvDrop {
    const NAME: &'static str = "INVDROP";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            slot: SlotObject::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        self.slot.encode(w);
    }
}

/// `INVSWAP` — swap two inventory slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvSwap {
    pub time: i32,
    pub position: WorldPos,
    pub slot1: SlotObject,
    pub slot2: SlotObject,
}

impl PacketBody for InvSwap {
    const NAME: &'static str = "INVSWAP";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            position: WorldPos::decode(r)?,
            slot1: SlotObject::decode(r)?,
            slot2: SlotObject::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        self.position.encode(w);
        self.slot1.encode(w);
        self.slot2.encode(w);
    }
}

/// `JOINGUILD`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinGuild {
    pub guild_name: String,
}

impl PacketBody for JoinGuild {
    const NAME: &'static str = "JOINGUILD";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            guild_name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.guild_name);
    }
}

/// `LOAD` — load an existing character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Load {
    pub char_id: i32,
}

impl PacketBody for Load {
    const NAME: &'static str = "LOAD";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            char_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.char_id);
    }
}

/// `MOVE` — tick acknowledgement plus recent movement history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Move {
    pub tick_id: i32,
    pub time: i32,
    pub new_position: WorldPos,
    pub records: Vec<MoveRecord>,
}

impl PacketBody for Move {
    const NAME: &'static str = "MOVE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            tick_id: r.read_i32()?,
            time: r.read_i32()?,
            new_position: WorldPos::decode(r)?,
            records: decode_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.tick_id);
        w.write_i32(self.time);
        self.new_position.encode(w);
        encode_list(&self.records, w);
    }
}

/// `OTHERHIT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherHit {
    pub time: i32,
    pub bullet_id: u8,
    pub object_id: i32,
    pub target_id: i32,
}

impl PacketBody for OtherHit {
    const NAME: &'static str = "OTHERHIT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            bullet_id: r.read_u8()?,
            object_id: r.read_i32()?,
            target_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        w.write_u8(self.bullet_id);
        w.write_i32(self.object_id);
        w.write_i32(self.target_id);
    }
}

/// `PLAYERHIT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHit {
    pub bullet_id: u8,
    pub object_id: i32,
}

impl PacketBody for PlayerHit {
    const NAME: &'static str = "PLAYERHIT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            bullet_id: r.read_u8()?,
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.bullet_id);
        w.write_i32(self.object_id);
    }
}

/// `PLAYERSHOOT`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerShoot {
    pub time: i32,
    pub bullet_id: u8,
    pub container_type: i16,
    pub starting_pos: WorldPos,
    pub angle: f32,
}

impl PacketBody for PlayerShoot {
    const NAME: &'static str = "PLAYERSHOOT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            bullet_id: r.read_u8()?,
            container_type: r.read_i16()?,
            starting_pos: WorldPos::decode(r)?,
            angle: r.read_f32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        w.write_u8(self.bullet_id);
        w.write_i16(self.container_type);
        self.starting_pos.encode(w);
        w.write_f32(self.angle);
    }
}

/// `PLAYERTEXT` — chat input as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerText {
    pub text: String,
}

impl PacketBody for PlayerText {
    const NAME: &'static str = "PLAYERTEXT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            text: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.text);
    }
}

/// `PONG` — answers the server's `PING`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pong {
    pub serial: i32,
    pub time: i32,
}

impl PacketBody for Pong {
    const NAME: &'static str = "PONG";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            serial: r.read_i32()?,
            time: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.serial);
        w.write_i32(self.time);
    }
}

/// `REQUESTTRADE`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTrade {
    pub name: String,
}

impl PacketBody for RequestTrade {
    const NAME: &'static str = "REQUESTTRADE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
    }
}

/// `RESKIN`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reskin {
    pub skin_id: i32,
}

impl PacketBody for Reskin {
    const NAME: &'static str = "RESKIN";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            skin_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.skin_id);
    }
}

/// `SETCONDITION` — self-applied condition effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetCondition {
    pub condition_effect: u8,
    pub condition_duration: f32,
}

impl PacketBody for SetCondition {
    const NAME: &'static str = "SETCONDITION";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            condition_effect: r.read_u8()?,
            condition_duration: r.read_f32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.condition_effect);
        w.write_f32(self.condition_duration);
    }
}

/// `SHOOTACK`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShootAck {
    pub time: i32,
}

impl PacketBody for ShootAck {
    const NAME: &'static str = "SHOOTACK";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
    }
}

/// `SQUAREHIT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SquareHit {
    pub time: i32,
    pub bullet_id: u8,
    pub object_id: i32,
}

impl PacketBody for SquareHit {
    const NAME: &'static str = "SQUAREHIT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            bullet_id: r.read_u8()?,
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        w.write_u8(self.bullet_id);
        w.write_i32(self.object_id);
    }
}

/// `TELEPORT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Teleport {
    pub object_id: i32,
}

impl PacketBody for Teleport {
    const NAME: &'static str = "TELEPORT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
    }
}

/// `UPDATEACK` — no payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateAck;

impl PacketBody for UpdateAck {
    const NAME: &'static str = "UPDATEACK";

    fn decode(_r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self)
    }

    fn encode(&self, _w: &mut PacketWriter) {}
}

/// `USEITEM`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UseItem {
    pub time: i32,
    pub slot: SlotObject,
    pub item_use_pos: WorldPos,
    pub use_type: u8,
}

impl PacketBody for UseItem {
    const NAME: &'static str = "USEITEM";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            time: r.read_i32()?,
            slot: SlotObject::decode(r)?,
            item_use_pos: WorldPos::decode(r)?,
            use_type: r.read_u8()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.time);
        self.slot.encode(w);
        self.item_use_pos.encode(w);
        w.write_u8(self.use_type);
    }
}

/// `USEPORTAL`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsePortal {
    pub object_id: i32,
}

impl PacketBody for UsePortal {
    const NAME: &'static str = "USEPORTAL";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
    }
}
