//! Server → client packet kinds.
//!
//! Flat field structs with mechanical [`PacketBody`] impls; fields appear in
//! the exact order they occupy on the wire.

use crate::core::io::{PacketReader, PacketWriter};
use crate::error::FormatError;
use crate::protocol::data::{
    decode_bool_list, decode_list, encode_bool_list, encode_list, Bitmap, GroundTile, ObjectData,
    ObjectStatus, TradeItem, Wire, WorldPos,
};
use crate::protocol::packet::PacketBody;

/// `ACCOUNTLIST` — one of the player's account lists (locked, ignored).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountList {
    pub account_list_id: i32,
    pub account_ids: Vec<String>,
}

impl PacketBody for AccountList {
    const NAME: &'static str = "ACCOUNTLIST";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        let account_list_id = r.read_i32()?;
        let count = r.read_u16()? as usize;
        let mut account_ids = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            account_ids.push(r.read_string()?);
        }
        Ok(Self {
            account_list_id,
            account_ids,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.account_list_id);
        w.write_u16(self.account_ids.len() as u16);
        for id in &self.account_ids {
            w.write_string(id);
        }
    }
}

/// `ALLYSHOOT` — another player's shot, for display only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllyShoot {
    pub bullet_id: u8,
    pub owner_id: i32,
    pub container_type: i16,
    pub angle: f32,
}

impl PacketBody for AllyShoot {
    const NAME: &'static str = "ALLYSHOOT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            bullet_id: r.read_u8()?,
            owner_id: r.read_i32()?,
            container_type: r.read_i16()?,
            angle: r.read_f32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.bullet_id);
        w.write_i32(self.owner_id);
        w.write_i16(self.container_type);
        w.write_f32(self.angle);
    }
}

/// `AOE` — area-of-effect blast.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aoe {
    pub pos: WorldPos,
    pub radius: f32,
    pub damage: u16,
    pub effect: u8,
    pub duration: f32,
    pub orig_type: i16,
}

impl PacketBody for Aoe {
    const NAME: &'static str = "AOE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            pos: WorldPos::decode(r)?,
            radius: r.read_f32()?,
            damage: r.read_u16()?,
            effect: r.read_u8()?,
            duration: r.read_f32()?,
            orig_type: r.read_i16()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        self.pos.encode(w);
        w.write_f32(self.radius);
        w.write_u16(self.damage);
        w.write_u8(self.effect);
        w.write_f32(self.duration);
        w.write_i16(self.orig_type);
    }
}

/// `BUYRESULT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuyResult {
    pub result: i32,
}

impl PacketBody for BuyResult {
    const NAME: &'static str = "BUYRESULT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            result: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.result);
    }
}

/// `CLIENTSTAT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientStat {
    pub name: String,
    pub value: i32,
}

impl PacketBody for ClientStat {
    const NAME: &'static str = "CLIENTSTAT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
            value: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
        w.write_i32(self.value);
    }
}

/// `CREATE_SUCCESS` — character creation/load accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateSuccess {
    pub object_id: i32,
    pub char_id: i32,
}

impl PacketBody for CreateSuccess {
    const NAME: &'static str = "CREATE_SUCCESS";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
            char_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
        w.write_i32(self.char_id);
    }
}

/// `CREATEGUILDRESULT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateGuildResult {
    pub success: bool,
    pub error_text: String,
}

impl PacketBody for CreateGuildResult {
    const NAME: &'static str = "CREATEGUILDRESULT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            success: r.read_bool()?,
            error_text: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_bool(self.success);
        w.write_string(&self.error_text);
    }
}

/// `DAMAGE` — damage dealt to an entity, with applied condition effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Damage {
    pub target_id: i32,
    pub effects: Vec<u8>,
    pub damage_amount: u16,
    pub kill: bool,
    pub bullet_id: u8,
    pub object_id: i32,
}

impl PacketBody for Damage {
    const NAME: &'static str = "DAMAGE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        let target_id = r.read_i32()?;
        let count = r.read_u8()? as usize;
        let effects = r.read_bytes(count)?.to_vec();
        Ok(Self {
            target_id,
            effects,
            damage_amount: r.read_u16()?,
            kill: r.read_bool()?,
            bullet_id: r.read_u8()?,
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.target_id);
        w.write_u8(self.effects.len() as u8);
        w.write_bytes(&self.effects);
        w.write_u16(self.damage_amount);
        w.write_bool(self.kill);
        w.write_u8(self.bullet_id);
        w.write_i32(self.object_id);
    }
}

/// `DEATH`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Death {
    pub account_id: String,
    pub char_id: i32,
    pub killed_by: String,
}

impl PacketBody for Death {
    const NAME: &'static str = "DEATH";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            account_id: r.read_string()?,
            char_id: r.read_i32()?,
            killed_by: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.account_id);
        w.write_i32(self.char_id);
        w.write_string(&self.killed_by);
    }
}

/// `FAILURE` — server rejected something; text is shown to the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    pub error_id: i32,
    pub error_description: String,
}

impl PacketBody for Failure {
    const NAME: &'static str = "FAILURE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            error_id: r.read_i32()?,
            error_description: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.error_id);
        w.write_string(&self.error_description);
    }
}

/// `FILE` — a file pushed to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    pub filename: String,
    pub file: Vec<u8>,
}

impl PacketBody for File {
    const NAME: &'static str = "FILE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            filename: r.read_string()?,
            file: r.read_long_bytes()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.filename);
        w.write_long_bytes(&self.file);
    }
}

/// `GLOBAL_NOTIFICATION`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalNotification {
    pub notification_type: i32,
    pub text: String,
}

impl PacketBody for GlobalNotification {
    const NAME: &'static str = "GLOBAL_NOTIFICATION";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            notification_type: r.read_i32()?,
            text: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.notification_type);
        w.write_string(&self.text);
    }
}

/// `GOTO` — snap an entity to a position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Goto {
    pub object_id: i32,
    pub position: WorldPos,
}

impl PacketBody for Goto {
    const NAME: &'static str = "GOTO";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
            position: WorldPos::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
        self.position.encode(w);
    }
}

/// `INVITEDTOGUILD`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvitedToGuild {
    pub name: String,
    pub guild_name: String,
}

impl PacketBody for InvitedToGuild {
    const NAME: &'static str = "INVITEDTOGUILD";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
            guild_name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
        w.write_string(&self.guild_name);
    }
}

/// `INVRESULT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvResult {
    pub result: i32,
}

impl PacketBody for InvResult {
    const NAME: &'static str = "INVRESULT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            result: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.result);
    }
}

/// `MAPINFO` — world metadata sent right after `HELLO` is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapInfo {
    pub width: i32,
    pub height: i32,
    pub name: String,
    pub seed: i32,
    pub background: i32,
    pub allow_player_teleport: bool,
    pub show_displays: bool,
    pub client_xml: Vec<String>,
    pub extra_xml: Vec<String>,
}

impl MapInfo {
    fn decode_xml_list(r: &mut PacketReader<'_>) -> Result<Vec<String>, FormatError> {
        let count = r.read_u16()? as usize;
        let mut items = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            items.push(r.read_long_string()?);
        }
        Ok(items)
    }

    fn encode_xml_list(items: &[String], w: &mut PacketWriter) {
        w.write_u16(items.len() as u16);
        for item in items {
            w.write_long_string(item);
        }
    }
}

impl PacketBody for MapInfo {
    const NAME: &'static str = "MAPINFO";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            width: r.read_i32()?,
            height: r.read_i32()?,
            name: r.read_string()?,
            seed: r.read_i32()?,
            background: r.read_i32()?,
            allow_player_teleport: r.read_bool()?,
            show_displays: r.read_bool()?,
            client_xml: Self::decode_xml_list(r)?,
            extra_xml: Self::decode_xml_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.width);
        w.write_i32(self.height);
        w.write_string(&self.name);
        w.write_i32(self.seed);
        w.write_i32(self.background);
        w.write_bool(self.allow_player_teleport);
        w.write_bool(self.show_displays);
        Self::encode_xml_list(&self.client_xml, w);
        Self::encode_xml_list(&self.extra_xml, w);
    }
}

/// `NAMERESULT`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameResult {
    pub success: bool,
    pub error_text: String,
}

impl PacketBody for NameResult {
    const NAME: &'static str = "NAMERESULT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            success: r.read_bool()?,
            error_text: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_bool(self.success);
        w.write_string(&self.error_text);
    }
}

/// `NEW_TICK` — per-tick status deltas for visible entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTick {
    pub tick_id: i32,
    pub tick_time: i32,
    pub statuses: Vec<ObjectStatus>,
}

impl PacketBody for NewTick {
    const NAME: &'static str = "NEW_TICK";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            tick_id: r.read_i32()?,
            tick_time: r.read_i32()?,
            statuses: decode_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.tick_id);
        w.write_i32(self.tick_time);
        encode_list(&self.statuses, w);
    }
}

/// `NOTIFICATION` — floating text over an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub object_id: i32,
    pub message: String,
    pub color: i32,
}

impl PacketBody for Notification {
    const NAME: &'static str = "NOTIFICATION";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
            message: r.read_string()?,
            color: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
        w.write_string(&self.message);
        w.write_i32(self.color);
    }
}

/// `PIC` — full-screen image; the bitmap layout is opaque to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pic {
    pub bitmap: Bitmap,
}

impl PacketBody for Pic {
    const NAME: &'static str = "PIC";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            bitmap: Bitmap::decode(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        self.bitmap.encode(w);
    }
}

/// `PING`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ping {
    pub serial: i32,
}

impl PacketBody for Ping {
    const NAME: &'static str = "PING";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            serial: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.serial);
    }
}

/// `PLAYSOUND`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaySound {
    pub owner_id: i32,
    pub sound_id: u8,
}

impl PacketBody for PlaySound {
    const NAME: &'static str = "PLAYSOUND";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            owner_id: r.read_i32()?,
            sound_id: r.read_u8()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.owner_id);
        w.write_u8(self.sound_id);
    }
}

/// `QUESTOBJID` — which entity the quest arrow points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestObjId {
    pub object_id: i32,
}

impl PacketBody for QuestObjId {
    const NAME: &'static str = "QUESTOBJID";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            object_id: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.object_id);
    }
}

/// `RECONNECT` — move the client to another server/world.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconnect {
    pub name: String,
    pub host: String,
    pub port: i32,
    pub game_id: i32,
    pub key_time: i32,
    pub key: Vec<u8>,
}

impl PacketBody for Reconnect {
    const NAME: &'static str = "RECONNECT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
            host: r.read_string()?,
            port: r.read_i32()?,
            game_id: r.read_i32()?,
            key_time: r.read_i32()?,
            key: {
                let len = r.read_u16()? as usize;
                r.read_bytes(len)?.to_vec()
            },
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
        w.write_string(&self.host);
        w.write_i32(self.port);
        w.write_i32(self.game_id);
        w.write_i32(self.key_time);
        w.write_u16(self.key.len() as u16);
        w.write_bytes(&self.key);
    }
}

/// `SHOOT` — a single enemy projectile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shoot {
    pub bullet_id: u8,
    pub owner_id: i32,
    pub container_type: i16,
    pub starting_pos: WorldPos,
    pub angle: f32,
    pub damage: i16,
}

impl PacketBody for Shoot {
    const NAME: &'static str = "SHOOT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            bullet_id: r.read_u8()?,
            owner_id: r.read_i32()?,
            container_type: r.read_i16()?,
            starting_pos: WorldPos::decode(r)?,
            angle: r.read_f32()?,
            damage: r.read_i16()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.bullet_id);
        w.write_i32(self.owner_id);
        w.write_i16(self.container_type);
        self.starting_pos.encode(w);
        w.write_f32(self.angle);
        w.write_i16(self.damage);
    }
}

/// `SHOOT2` — a fanned volley of projectiles from one shot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shoot2 {
    pub bullet_id: u8,
    pub owner_id: i32,
    pub bullet_type: u8,
    pub starting_pos: WorldPos,
    pub angle: f32,
    pub damage: i16,
    pub num_shots: u8,
    pub angle_inc: f32,
}

impl PacketBody for Shoot2 {
    const NAME: &'static str = "SHOOT2";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            bullet_id: r.read_u8()?,
            owner_id: r.read_i32()?,
            bullet_type: r.read_u8()?,
            starting_pos: WorldPos::decode(r)?,
            angle: r.read_f32()?,
            damage: r.read_i16()?,
            num_shots: r.read_u8()?,
            angle_inc: r.read_f32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.bullet_id);
        w.write_i32(self.owner_id);
        w.write_u8(self.bullet_type);
        self.starting_pos.encode(w);
        w.write_f32(self.angle);
        w.write_i16(self.damage);
        w.write_u8(self.num_shots);
        w.write_f32(self.angle_inc);
    }
}

/// `SHOW_EFFECT` — visual effect between two points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowEffect {
    pub effect_type: u8,
    pub target_object_id: i32,
    pub pos1: WorldPos,
    pub pos2: WorldPos,
    pub color: i32,
}

impl PacketBody for ShowEffect {
    const NAME: &'static str = "SHOW_EFFECT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            effect_type: r.read_u8()?,
            target_object_id: r.read_i32()?,
            pos1: WorldPos::decode(r)?,
            pos2: WorldPos::decode(r)?,
            color: r.read_i32()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_u8(self.effect_type);
        w.write_i32(self.target_object_id);
        self.pos1.encode(w);
        self.pos2.encode(w);
        w.write_i32(self.color);
    }
}

/// `TEXT` — chat line as broadcast to clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub name: String,
    pub object_id: i32,
    pub num_stars: i32,
    pub bubble_time: u8,
    pub recipient: String,
    pub text: String,
    pub clean_text: String,
}

impl PacketBody for Text {
    const NAME: &'static str = "TEXT";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
            object_id: r.read_i32()?,
            num_stars: r.read_i32()?,
            bubble_time: r.read_u8()?,
            recipient: r.read_string()?,
            text: r.read_string()?,
            clean_text: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
        w.write_i32(self.object_id);
        w.write_i32(self.num_stars);
        w.write_u8(self.bubble_time);
        w.write_string(&self.recipient);
        w.write_string(&self.text);
        w.write_string(&self.clean_text);
    }
}

/// `TRADEACCEPTED`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeAccepted {
    pub my_offers: Vec<bool>,
    pub your_offers: Vec<bool>,
}

impl PacketBody for TradeAccepted {
    const NAME: &'static str = "TRADEACCEPTED";

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

/// `TRADECHANGED`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeChanged {
    pub offers: Vec<bool>,
}

impl PacketBody for TradeChanged {
    const NAME: &'static str = "TRADECHANGED";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            offers: decode_bool_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        encode_bool_list(&self.offers, w);
    }
}

/// `TRADEDONE`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeDone {
    pub code: i32,
    pub description: String,
}

impl PacketBody for TradeDone {
    const NAME: &'static str = "TRADEDONE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            code: r.read_i32()?,
            description: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_i32(self.code);
        w.write_string(&self.description);
    }
}

/// `TRADEREQUESTED`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeRequested {
    pub name: String,
}

impl PacketBody for TradeRequested {
    const NAME: &'static str = "TRADEREQUESTED";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            name: r.read_string()?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        w.write_string(&self.name);
    }
}

/// `TRADESTART` — both inventories as the trade screen opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeStart {
    pub my_items: Vec<TradeItem>,
    pub your_name: String,
    pub your_items: Vec<TradeItem>,
}

impl PacketBody for TradeStart {
    const NAME: &'static str = "TRADESTART";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            my_items: decode_list(r)?,
            your_name: r.read_string()?,
            your_items: decode_list(r)?,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        encode_list(&self.my_items, w);
        w.write_string(&self.your_name);
        encode_list(&self.your_items, w);
    }
}

/// `UPDATE` — tiles, newly visible objects, and despawned object ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub tiles: Vec<GroundTile>,
    pub new_objs: Vec<ObjectData>,
    pub drops: Vec<i32>,
}

impl PacketBody for Update {
    const NAME: &'static str = "UPDATE";

    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError> {
        let tiles = decode_list(r)?;
        let new_objs = decode_list(r)?;
        let count = r.read_u16()? as usize;
        let mut drops = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            drops.push(r.read_i32()?);
        }
        Ok(Self {
            tiles,
            new_objs,
            drops,
        })
    }

    fn encode(&self, w: &mut PacketWriter) {
        encode_list(&self.tiles, w);
        encode_list(&self.new_objs, w);
        w.write_u16(self.drops.len() as u16);
        for drop in &self.drops {
            w.write_i32(*drop);
        }
    }
}
