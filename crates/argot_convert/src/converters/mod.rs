//! Built-in converters for entity types.
//!
//! Every converter tries ID-based strategies before name-based ones and
//! reads the session cache before asking the remote.
//!
//! | Converter | Resolves |
//! |---|---|
//! | [`ObjectConverter`] | any ID or mention |
//! | [`MemberConverter`] | guild member |
//! | [`UserConverter`] | platform user |
//! | [`MessageConverter`] | message, fetched on a cache miss |
//! | [`PartialMessageConverter`] | message reference |
//! | [`GuildChannelConverter`] and friends | guild channel of a given kind |
//! | [`ThreadConverter`] | thread |
//! | [`RoleConverter`] | role |
//! | [`GuildConverter`] | joined guild |
//! | [`EmojiConverter`] | custom emoji |
//! | [`PartialEmojiConverter`] | emoji mention |
//! | [`StickerConverter`] | sticker |
//! | [`InviteConverter`] | invite |
//! | [`GameConverter`] | activity name |
//! | [`ColourConverter`] | colour |
//! | [`CleanContentConverter`] | mention-free text |

mod channel;
mod clean_content;
mod colour;
mod emoji;
mod invite;
mod member;
mod message;
mod object;
mod role;

#[cfg(test)]
pub(crate) mod fixture;

pub use channel::{
    CategoryChannelConverter, GuildChannelConverter, StageChannelConverter, StoreChannelConverter,
    TextChannelConverter, ThreadConverter, VoiceChannelConverter,
};
pub use clean_content::CleanContentConverter;
pub use colour::{ColorConverter, ColourConverter};
pub use emoji::{EmojiConverter, PartialEmojiConverter, StickerConverter};
pub use invite::InviteConverter;
pub use member::{MemberConverter, UserConverter};
pub use message::{MessageConverter, MessageReference, PartialMessageConverter, parse_message_reference};
pub use object::{GameConverter, ObjectConverter};
pub use role::{GuildConverter, RoleConverter};
