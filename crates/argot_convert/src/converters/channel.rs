//! Guild channel and thread converters.

use async_trait::async_trait;

use argot_foundation::{EntityKind, Error, Result, Type, Value};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};
use crate::patterns::{CHANNEL_MENTION, id_or_mention};

/// Resolves a channel of one of `ty`'s kinds.
///
/// IDs and `<#ID>` are looked up in the current guild, or in every joined
/// guild outside one. Names are matched among the current guild's channels
/// of the right kind, or among every channel of the right kind.
fn resolve_channel(ctx: &Context, argument: &str, ty: Type) -> Result<Value> {
    let kinds = ty.channel_kinds().unwrap_or_default();
    let not_found = || Error::not_found(EntityKind::Channel, argument);
    let cache = ctx.cache();
    let guild = ctx.guild();

    let found = match (id_or_mention(argument, &CHANNEL_MENTION), &guild) {
        (Some(id), Some(guild)) => guild.get_channel(id).cloned(),
        (Some(id), None) => cache.guilds().find_map(|g| g.get_channel(id)).cloned(),
        (None, Some(guild)) => guild
            .channels()
            .find(|c| kinds.contains(&c.kind) && c.name == argument)
            .cloned(),
        (None, None) => cache
            .all_channels()
            .find(|c| kinds.contains(&c.kind) && c.name == argument)
            .cloned(),
    };
    found
        .filter(|c| kinds.contains(&c.kind))
        .map(Value::Channel)
        .ok_or_else(not_found)
}

macro_rules! channel_converters {
    ($($(#[$doc:meta])* $name:ident => $ty:ident;)*) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name;

            #[async_trait]
            impl Converter for $name {
                async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
                    Ok(resolve_channel(ctx, argument, Type::$ty)?)
                }
            }
        )*
    };
}

channel_converters! {
    /// Converts to a guild channel of any kind.
    GuildChannelConverter => GuildChannel;
    /// Converts to a text or news channel.
    TextChannelConverter => TextChannel;
    /// Converts to a voice channel.
    VoiceChannelConverter => VoiceChannel;
    /// Converts to a stage channel.
    StageChannelConverter => StageChannel;
    /// Converts to a category.
    CategoryChannelConverter => CategoryChannel;
    /// Converts to a store channel.
    StoreChannelConverter => StoreChannel;
}

/// Converts to a thread in the current guild.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadConverter;

#[async_trait]
impl Converter for ThreadConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let thread = ctx.guild().and_then(|guild| match id_or_mention(argument, &CHANNEL_MENTION) {
            Some(id) => guild.get_thread(id).cloned(),
            None => guild.threads().find(|t| t.name == argument).cloned(),
        });
        thread
            .map(Value::Thread)
            .ok_or_else(|| Error::not_found(EntityKind::Thread, argument).into())
    }
}
