//! The variant codec contract and the packet tagged union.
//!
//! Every concrete packet kind implements [`PacketBody`]: decode a payload
//! positioned past the identifier byte, encode the exact payload back, and
//! report its canonical uppercase name. [`Packet`] is the closed sum over
//! all compiled kinds plus [`Unknown`], which carries unrecognized traffic
//! verbatim so the relay can forward what the codec does not understand.
//!
//! The [`VARIANTS`] table is the compiled variant list handed to
//! [`Registry::build`](crate::protocol::registry::Registry::build);
//! identifiers are not in it because they belong to the external mappings,
//! not the code.

use crate::core::io::{PacketReader, PacketWriter};
use crate::error::FormatError;
use crate::protocol::client::*;
use crate::protocol::server::*;

/// Codec contract every packet kind implements. Pure buffer transforms;
/// `decode(encode(x))` reproduces `x` exactly for every kind.
pub trait PacketBody: Default {
    /// Canonical uppercase name, unique across the compiled set.
    const NAME: &'static str;

    /// Populate all fields from a payload, in wire order.
    fn decode(r: &mut PacketReader<'_>) -> Result<Self, FormatError>
    where
        Self: Sized;

    /// Write all fields in the same order `decode` reads them.
    fn encode(&self, w: &mut PacketWriter);
}

/// Fallback for identifiers with no registered kind. Keeps the raw
/// identifier and payload untouched so re-encoding is a verbatim re-emit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unknown {
    pub id: u8,
    pub raw: Vec<u8>,
}

impl Unknown {
    pub const NAME: &'static str = "UNKNOWN";
}

/// One entry of the compiled variant list: the kind's name plus its
/// default-construct and decode entry points. Identifier resolution happens
/// at registry build, never here.
#[derive(Clone, Copy)]
pub struct VariantSpec {
    pub name: &'static str,
    pub make: fn() -> Packet,
    pub decode: fn(&mut PacketReader<'_>) -> Result<Packet, FormatError>,
}

impl std::fmt::Debug for VariantSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantSpec").field("name", &self.name).finish()
    }
}

macro_rules! packets {
    ($($ty:ident),+ $(,)?) => {
        /// Tagged union over every compiled packet kind plus [`Unknown`].
        #[derive(Debug, Clone, PartialEq)]
        pub enum Packet {
            $($ty($ty),)+
            Unknown(Unknown),
        }

        impl Packet {
            /// Canonical uppercase name of this kind, for diagnostics.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Packet::$ty(_) => <$ty as PacketBody>::NAME,)+
                    Packet::Unknown(_) => Unknown::NAME,
                }
            }

            /// Serialize the payload exactly as it appears on the wire
            /// (identifier byte not included; framing owns that).
            pub fn encode(&self) -> Vec<u8> {
                let mut w = PacketWriter::new();
                match self {
                    $(Packet::$ty(p) => p.encode(&mut w),)+
                    Packet::Unknown(p) => w.write_bytes(&p.raw),
                }
                w.into_bytes()
            }

            /// Whether this is the [`Unknown`] fallback.
            pub fn is_unknown(&self) -> bool {
                matches!(self, Packet::Unknown(_))
            }
        }

        $(
            impl From<$ty> for Packet {
                fn from(p: $ty) -> Self {
                    Packet::$ty(p)
                }
            }
        )+

        /// The compiled variant list, in the order the kinds were added to
        /// the protocol. Registry build resolves each name against the
        /// external mappings exactly once.
        pub const VARIANTS: &[VariantSpec] = &[
            $(VariantSpec {
                name: <$ty as PacketBody>::NAME,
                make: || Packet::$ty(<$ty>::default()),
                decode: |r| Ok(Packet::$ty(<$ty as PacketBody>::decode(r)?)),
            },)+
        ];
    };
}

packets! {
    AcceptTrade,
    AccountList,
    AllyShoot,
    AoeAck,
    Aoe,
    Buy,
    BuyResult,
    CancelTrade,
    ChangeGuildRank,
    ChangeTrade,
    CheckCredits,
    ChooseName,
    ClientStat,
    CreateSuccess,
    CreateGuild,
    CreateGuildResult,
    Create,
    Damage,
    Death,
    EditAccountList,
    EnemyHit,
    Escape,
    Failure,
    File,
    GlobalNotification,
    GotoAck,
    Goto,
    GroundDamage,
    GuildInvite,
    GuildRemove,
    Hello,
    InvDrop,
    InvitedToGuild,
    InvResult,
    InvSwap,
    JoinGuild,
    Load,
    MapInfo,
    Move,
    NameResult,
    NewTick,
    Notification,
    OtherHit,
    Pic,
    Ping,
    PlayerHit,
    PlayerShoot,
    PlayerText,
    PlaySound,
    Pong,
    QuestObjId,
    Reconnect,
    RequestTrade,
    Reskin,
    SetCondition,
    Shoot2,
    ShootAck,
    Shoot,
    ShowEffect,
    SquareHit,
    Teleport,
    Text,
    TradeAccepted,
    TradeChanged,
    TradeDone,
    TradeRequested,
    TradeStart,
    UpdateAck,
    Update,
    UseItem,
    UsePortal,
}
