//! Type descriptors for converted values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::ChannelKind;

/// A concrete type an argument can be converted into.
///
/// Entity types (see [`Type::is_entity`]) have a default converter in the
/// registry. The rest are built directly from the token.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// The absent value. Never constructible from a token.
    Absent,
    /// Boolean, from the fixed truthy/falsy word sets.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// The token itself.
    Str,
    /// Ordered list of values. Only produced by greedy parameters.
    List,
    /// A value produced by a user converter.
    Custom,
    /// A bare ID.
    Object,
    /// A guild member.
    Member,
    /// A platform user.
    User,
    /// A fetched message.
    Message,
    /// A message reference.
    PartialMessage,
    /// Any guild channel.
    GuildChannel,
    /// A text channel.
    TextChannel,
    /// A voice channel.
    VoiceChannel,
    /// A stage channel.
    StageChannel,
    /// A category.
    CategoryChannel,
    /// A store channel.
    StoreChannel,
    /// A thread.
    Thread,
    /// A resolved invite.
    Invite,
    /// A guild.
    Guild,
    /// A guild role.
    Role,
    /// An activity name.
    Game,
    /// A colour.
    Colour,
    /// A cached custom emoji.
    Emoji,
    /// An emoji parsed from its mention.
    PartialEmoji,
    /// A guild sticker.
    Sticker,
}

impl Type {
    /// Every entity type, in registry order.
    pub const ENTITIES: [Type; 20] = [
        Type::Object,
        Type::Member,
        Type::User,
        Type::Message,
        Type::PartialMessage,
        Type::TextChannel,
        Type::Invite,
        Type::Guild,
        Type::Role,
        Type::Game,
        Type::Colour,
        Type::VoiceChannel,
        Type::StageChannel,
        Type::Emoji,
        Type::PartialEmoji,
        Type::CategoryChannel,
        Type::StoreChannel,
        Type::Thread,
        Type::GuildChannel,
        Type::Sticker,
    ];

    /// Returns true for domain entity types, which convert through the registry.
    #[must_use]
    pub const fn is_entity(self) -> bool {
        !matches!(
            self,
            Self::Absent | Self::Bool | Self::Int | Self::Float | Self::Str | Self::List | Self::Custom
        )
    }

    /// The channel kinds a channel-family type accepts, or `None` for
    /// non-channel types. `GuildChannel` accepts every guild kind.
    #[must_use]
    pub fn channel_kinds(self) -> Option<&'static [ChannelKind]> {
        use ChannelKind::{Category, News, Stage, Store, Text, Voice};
        match self {
            Self::GuildChannel => Some(&[Text, Voice, Stage, Category, Store, News]),
            Self::TextChannel => Some(&[Text, News]),
            Self::VoiceChannel => Some(&[Voice]),
            Self::StageChannel => Some(&[Stage]),
            Self::CategoryChannel => Some(&[Category]),
            Self::StoreChannel => Some(&[Store]),
            _ => None,
        }
    }

    /// The name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Absent => "NoneType",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::List => "list",
            Self::Custom => "custom",
            Self::Object => "Object",
            Self::Member => "Member",
            Self::User => "User",
            Self::Message => "Message",
            Self::PartialMessage => "PartialMessage",
            Self::GuildChannel => "GuildChannel",
            Self::TextChannel => "TextChannel",
            Self::VoiceChannel => "VoiceChannel",
            Self::StageChannel => "StageChannel",
            Self::CategoryChannel => "CategoryChannel",
            Self::StoreChannel => "StoreChannel",
            Self::Thread => "Thread",
            Self::Invite => "Invite",
            Self::Guild => "Guild",
            Self::Role => "Role",
            Self::Game => "Game",
            Self::Colour => "Colour",
            Self::Emoji => "Emoji",
            Self::PartialEmoji => "PartialEmoji",
            Self::Sticker => "GuildSticker",
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
