//! Emoji, partial emoji, and sticker converters.

use async_trait::async_trait;

use argot_foundation::{EntityKind, Error, PartialEmoji, Value};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};
use crate::patterns::{EMOJI_MENTION, ID, PARTIAL_EMOJI, capture_id, id_or_mention};

/// Converts to a custom emoji.
///
/// IDs and `<:name:ID>` check every cached emoji. Names check the current
/// guild first, then every cached emoji.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmojiConverter;

#[async_trait]
impl Converter for EmojiConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let cache = ctx.cache();
        let emoji = match id_or_mention(argument, &EMOJI_MENTION) {
            Some(id) => cache.get_emoji(id).cloned(),
            None => ctx
                .guild()
                .and_then(|g| g.emojis().find(|e| e.name == argument).cloned())
                .or_else(|| cache.emojis().find(|e| e.name == argument).cloned()),
        };
        emoji
            .map(Value::Emoji)
            .ok_or_else(|| Error::not_found(EntityKind::Emoji, argument).into())
    }
}

/// Converts `<:name:ID>` or `<a:name:ID>` without looking anything up.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialEmojiConverter;

#[async_trait]
impl Converter for PartialEmojiConverter {
    async fn convert(&self, _ctx: &Context, argument: &str) -> ConverterResult {
        let partial = PARTIAL_EMOJI.captures(argument).and_then(|caps| {
            Some(PartialEmoji {
                animated: caps.get(1).is_some_and(|m| !m.as_str().is_empty()),
                name: caps.get(2)?.as_str().to_string(),
                id: capture_id(&ID, caps.get(3)?.as_str())?,
            })
        });
        partial
            .map(Value::PartialEmoji)
            .ok_or_else(|| Error::partial_emoji(argument).into())
    }
}

/// Converts to a guild sticker by ID, or by name in the current guild and
/// then everywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct StickerConverter;

#[async_trait]
impl Converter for StickerConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let cache = ctx.cache();
        let sticker = match capture_id(&ID, argument) {
            Some(id) => cache.get_sticker(id).cloned(),
            None => ctx
                .guild()
                .and_then(|g| g.stickers().find(|s| s.name == argument).cloned())
                .or_else(|| cache.stickers().find(|s| s.name == argument).cloned()),
        };
        sticker
            .map(Value::Sticker)
            .ok_or_else(|| Error::not_found(EntityKind::Sticker, argument).into())
    }
}
