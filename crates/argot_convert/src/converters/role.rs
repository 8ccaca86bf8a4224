//! Role and guild converters.

use async_trait::async_trait;

use argot_foundation::{EntityKind, Error, Value};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};
use crate::patterns::{ID, ROLE_MENTION, capture_id, id_or_mention};

/// Converts to a role in the current guild.
///
/// Roles only exist inside a guild, so a private invocation fails with
/// [`NoPrivateMessage`](argot_foundation::ErrorKind::NoPrivateMessage).
#[derive(Clone, Copy, Debug, Default)]
pub struct RoleConverter;

#[async_trait]
impl Converter for RoleConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let guild = ctx.guild().ok_or_else(Error::no_private_message)?;
        let role = match id_or_mention(argument, &ROLE_MENTION) {
            Some(id) => guild.get_role(id),
            None => guild.roles().find(|r| r.name == argument),
        };
        role.cloned()
            .map(Value::Role)
            .ok_or_else(|| Error::not_found(EntityKind::Role, argument).into())
    }
}

/// Converts to a joined guild, by ID and then by name.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuildConverter;

#[async_trait]
impl Converter for GuildConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let cache = ctx.cache();
        let by_id = capture_id(&ID, argument).and_then(|id| cache.get_guild(id));
        by_id
            .or_else(|| cache.guilds().find(|g| g.name() == argument))
            .map(|g| Value::Guild(g.info().clone()))
            .ok_or_else(|| Error::not_found(EntityKind::Guild, argument).into())
    }
}
