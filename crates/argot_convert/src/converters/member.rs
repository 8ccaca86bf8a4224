//! Member and user converters.

use async_trait::async_trait;
use tracing::{debug, warn};

use argot_foundation::{EntityKind, Error, Member, Snowflake, Value, split_tag};
use argot_session::{Guild, MemberQuery};

use crate::context::Context;
use crate::converter::{Converter, ConverterError, ConverterResult};
use crate::patterns::{USER_MENTION, id_or_mention};

/// Converts to a guild [`Member`].
///
/// Lookup order:
///
/// 1. ID or `<@ID>` / `<@!ID>`: the guild's member list, then the message's
///    mentioned members
/// 2. `name#discriminator`, then name, then nickname
/// 3. Outside a guild, every joined guild is scanned in join order
/// 4. On a miss inside a guild, the member is queried remotely
#[derive(Clone, Copy, Debug, Default)]
pub struct MemberConverter;

impl MemberConverter {
    async fn query_member_by_id(ctx: &Context, guild: &Guild, user_id: Snowflake) -> Result<Option<Member>, ConverterError> {
        let session = ctx.session();
        if session.is_guild_ratelimited(guild.id()) {
            warn!(guild_id = %guild.id(), %user_id, "member query throttled, fetching directly");
            return match session.fetch_member(guild.id(), user_id).await {
                Ok(member) => Ok(Some(member)),
                Err(err) if err.is_http() => Ok(None),
                Err(err) => Err(err.into()),
            };
        }
        let members = session.query_members(guild.id(), MemberQuery::by_ids(vec![user_id], 1)).await?;
        Ok(members.into_iter().next())
    }

    async fn query_member_named(ctx: &Context, guild: &Guild, argument: &str) -> Result<Option<Member>, ConverterError> {
        let limit = ctx.config().member_query_limit;
        let session = ctx.session();
        if let Some((username, discriminator)) = split_tag(argument) {
            let members = session.query_members(guild.id(), MemberQuery::named(username, limit)).await?;
            return Ok(members
                .into_iter()
                .find(|m| m.user.name == username && m.user.discriminator == discriminator));
        }
        let members = session.query_members(guild.id(), MemberQuery::named(argument, limit)).await?;
        Ok(members
            .into_iter()
            .find(|m| m.user.name == argument || m.nick.as_deref() == Some(argument)))
    }
}

#[async_trait]
impl Converter for MemberConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let user_id = id_or_mention(argument, &USER_MENTION);
        let guild = ctx.guild();

        let cached = match (user_id, &guild) {
            (Some(id), Some(guild)) => guild.get_member(id).cloned().or_else(|| {
                ctx.message()
                    .member_mentions
                    .iter()
                    .find(|m| m.id() == id)
                    .cloned()
            }),
            (Some(id), None) => ctx.cache().guilds().find_map(|g| g.get_member(id)).cloned(),
            (None, Some(guild)) => guild.get_member_named(argument).cloned(),
            (None, None) => ctx
                .cache()
                .guilds()
                .find_map(|g| g.get_member_named(argument))
                .cloned(),
        };
        if let Some(member) = cached {
            debug!(member_id = %member.id(), "member resolved from cache");
            return Ok(Value::Member(member));
        }

        let Some(guild) = guild else {
            return Err(Error::not_found(EntityKind::Member, argument).into());
        };
        let fetched = match user_id {
            Some(id) => Self::query_member_by_id(ctx, &guild, id).await?,
            None => Self::query_member_named(ctx, &guild, argument).await?,
        };
        fetched
            .map(Value::Member)
            .ok_or_else(|| Error::not_found(EntityKind::Member, argument).into())
    }
}

/// Converts to a platform [`User`](argot_foundation::User).
///
/// IDs and mentions check the user cache, then the message's mentions,
/// then fetch remotely. Names check `name#discriminator`, then the bare
/// name, after stripping one leading `@` if configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserConverter;

#[async_trait]
impl Converter for UserConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let cache = ctx.cache();

        if let Some(id) = id_or_mention(argument, &USER_MENTION) {
            let cached = cache
                .get_user(id)
                .or_else(|| ctx.message().mentions.iter().find(|u| u.id == id))
                .cloned();
            if let Some(user) = cached {
                return Ok(Value::User(user));
            }
            debug!(user_id = %id, "user not cached, fetching");
            return match ctx.session().fetch_user(id).await {
                Ok(user) => Ok(Value::User(user)),
                Err(err) if err.is_http() => Err(Error::not_found(EntityKind::User, argument).into()),
                Err(err) => Err(err.into()),
            };
        }

        let name = if ctx.config().strip_user_at {
            argument.strip_prefix('@').unwrap_or(argument)
        } else {
            argument
        };
        let tagged = split_tag(name).and_then(|(username, discriminator)| {
            cache
                .users()
                .find(|u| u.name == username && u.discriminator == discriminator)
        });
        tagged
            .or_else(|| cache.users().find(|u| u.name == name))
            .cloned()
            .map(Value::User)
            .ok_or_else(|| Error::not_found(EntityKind::User, argument).into())
    }
}
