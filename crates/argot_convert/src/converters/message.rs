//! Message and partial message converters.

use async_trait::async_trait;
use tracing::debug;

use argot_foundation::{EntityKind, Error, PartialMessage, Result, Snowflake, Value};
use argot_session::{ChannelRef, RemoteError};

use crate::context::Context;
use crate::converter::{Converter, ConverterError, ConverterResult};
use crate::patterns::{MESSAGE_ID, MESSAGE_LINK, named_id};

/// Where a message token points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageReference {
    /// The guild, `None` for direct messages.
    pub guild_id: Option<Snowflake>,
    /// The channel, `None` when only a message ID was given.
    pub channel_id: Option<Snowflake>,
    /// The message.
    pub message_id: Snowflake,
}

/// Parses `MESSAGE_ID`, `CHANNEL_ID-MESSAGE_ID`, or a message link.
///
/// The ID forms carry no guild, so they take `current_guild`. A link to
/// `@me` is a direct message.
///
/// # Errors
///
/// Returns a message not found error for anything else.
pub fn parse_message_reference(argument: &str, current_guild: Option<Snowflake>) -> Result<MessageReference> {
    let not_found = || Error::not_found(EntityKind::Message, argument);

    if let Some(caps) = MESSAGE_ID.captures(argument) {
        return Ok(MessageReference {
            guild_id: current_guild,
            channel_id: named_id(&caps, "channel_id"),
            message_id: named_id(&caps, "message_id").ok_or_else(not_found)?,
        });
    }

    let caps = MESSAGE_LINK.captures(argument).ok_or_else(not_found)?;
    let guild_id = match caps.name("guild_id").map(|m| m.as_str()) {
        Some("@me") => None,
        _ => Some(named_id(&caps, "guild_id").ok_or_else(not_found)?),
    };
    Ok(MessageReference {
        guild_id,
        channel_id: Some(named_id(&caps, "channel_id").ok_or_else(not_found)?),
        message_id: named_id(&caps, "message_id").ok_or_else(not_found)?,
    })
}

/// The channel a reference points into.
///
/// Without a channel ID this is the invocation channel.
fn resolve_channel(ctx: &Context, reference: &MessageReference) -> Result<ChannelRef> {
    let Some(channel_id) = reference.channel_id else {
        return Ok(ctx.channel().clone());
    };
    let cache = ctx.cache();
    let channel = match reference.guild_id {
        Some(guild_id) => cache.get_guild(guild_id).and_then(|g| g.resolve_channel(channel_id)),
        None => cache.get_channel(channel_id),
    };
    channel.ok_or_else(|| Error::not_found(EntityKind::Channel, channel_id.to_string()))
}

/// Converts to a [`Message`](argot_foundation::Message), fetching it when it
/// is not cached.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessageConverter;

#[async_trait]
impl Converter for MessageConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let reference = parse_message_reference(argument, ctx.guild_id())?;
        if let Some(message) = ctx.cache().get_message(reference.message_id) {
            return Ok(Value::Message(message.clone()));
        }

        let channel = resolve_channel(ctx, &reference)?;
        debug!(channel_id = %channel.id(), message_id = %reference.message_id, "message not cached, fetching");
        match ctx.session().fetch_message(channel.id(), reference.message_id).await {
            Ok(message) => Ok(Value::Message(message)),
            Err(RemoteError::NotFound(_)) => Err(Error::not_found(EntityKind::Message, argument).into()),
            Err(RemoteError::Forbidden(_)) => Err(Error::channel_not_readable(channel.mention()).into()),
            Err(err) => Err(ConverterError::from(err)),
        }
    }
}

/// Converts to a [`PartialMessage`] without fetching anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct PartialMessageConverter;

#[async_trait]
impl Converter for PartialMessageConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let reference = parse_message_reference(argument, ctx.guild_id())?;
        let channel = resolve_channel(ctx, &reference)?;
        Ok(Value::PartialMessage(PartialMessage {
            id: reference.message_id,
            channel_id: channel.id(),
            guild_id: channel.guild_id(),
        }))
    }
}
