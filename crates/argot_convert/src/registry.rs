//! Default converters for entity types.
//!
//! The mapping is fixed at compile time. It is consulted when an annotation
//! names an entity type directly; explicit converters bypass it.

use argot_foundation::Type;

use crate::converter::ConverterSpec;
use crate::converters::{
    CategoryChannelConverter, ColourConverter, EmojiConverter, GameConverter, GuildChannelConverter,
    GuildConverter, InviteConverter, MemberConverter, MessageConverter, ObjectConverter,
    PartialEmojiConverter, PartialMessageConverter, RoleConverter, StageChannelConverter,
    StickerConverter, StoreChannelConverter, TextChannelConverter, ThreadConverter, UserConverter,
    VoiceChannelConverter,
};

/// The entity type to converter mapping.
pub struct Registry;

impl Registry {
    /// The default converter for `ty`, or `None` for non-entity types.
    #[must_use]
    pub fn get(ty: Type) -> Option<ConverterSpec> {
        let spec = match ty {
            Type::Object => ConverterSpec::declarative::<ObjectConverter>(),
            Type::Member => ConverterSpec::declarative::<MemberConverter>(),
            Type::User => ConverterSpec::declarative::<UserConverter>(),
            Type::Message => ConverterSpec::declarative::<MessageConverter>(),
            Type::PartialMessage => ConverterSpec::declarative::<PartialMessageConverter>(),
            Type::TextChannel => ConverterSpec::declarative::<TextChannelConverter>(),
            Type::Invite => ConverterSpec::declarative::<InviteConverter>(),
            Type::Guild => ConverterSpec::declarative::<GuildConverter>(),
            Type::Role => ConverterSpec::declarative::<RoleConverter>(),
            Type::Game => ConverterSpec::declarative::<GameConverter>(),
            Type::Colour => ConverterSpec::declarative::<ColourConverter>(),
            Type::VoiceChannel => ConverterSpec::declarative::<VoiceChannelConverter>(),
            Type::StageChannel => ConverterSpec::declarative::<StageChannelConverter>(),
            Type::Emoji => ConverterSpec::declarative::<EmojiConverter>(),
            Type::PartialEmoji => ConverterSpec::declarative::<PartialEmojiConverter>(),
            Type::CategoryChannel => ConverterSpec::declarative::<CategoryChannelConverter>(),
            Type::StoreChannel => ConverterSpec::declarative::<StoreChannelConverter>(),
            Type::Thread => ConverterSpec::declarative::<ThreadConverter>(),
            Type::GuildChannel => ConverterSpec::declarative::<GuildChannelConverter>(),
            Type::Sticker => ConverterSpec::declarative::<StickerConverter>(),
            Type::Absent
            | Type::Bool
            | Type::Int
            | Type::Float
            | Type::Str
            | Type::List
            | Type::Custom => return None,
        };
        Some(spec)
    }
}
