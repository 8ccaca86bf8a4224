//! Mention-free message content.

use async_trait::async_trait;
use regex::Captures;

use argot_foundation::{Snowflake, Value};
use argot_session::{Cache, Guild};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};
use crate::markdown::{escape_markdown, escape_mentions, remove_markdown};
use crate::patterns::INLINE_MENTION;

/// Replaces mentions in the token with readable names.
///
/// User and member mentions become `@name`, role mentions `@role`, and,
/// when enabled inside a guild, channel mentions `#channel`. Mass mentions
/// are always neutralized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CleanContentConverter {
    fix_channel_mentions: bool,
    use_nicknames: bool,
    escape_markdown: bool,
    remove_markdown: bool,
}

impl Default for CleanContentConverter {
    fn default() -> Self {
        Self {
            fix_channel_mentions: false,
            use_nicknames: true,
            escape_markdown: false,
            remove_markdown: false,
        }
    }
}

impl CleanContentConverter {
    /// Creates a converter with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces channel mentions with `#name`.
    #[must_use]
    pub fn with_fix_channel_mentions(mut self, fix: bool) -> Self {
        self.fix_channel_mentions = fix;
        self
    }

    /// Uses nicknames rather than account names for members.
    #[must_use]
    pub fn with_use_nicknames(mut self, use_nicknames: bool) -> Self {
        self.use_nicknames = use_nicknames;
        self
    }

    /// Escapes markdown in the result. Takes precedence over removal.
    #[must_use]
    pub fn with_escape_markdown(mut self, escape: bool) -> Self {
        self.escape_markdown = escape;
        self
    }

    /// Strips markdown from the result.
    #[must_use]
    pub fn with_remove_markdown(mut self, remove: bool) -> Self {
        self.remove_markdown = remove;
        self
    }

    fn member(&self, ctx: &Context, guild: Option<&Guild>, cache: &Cache, id: Snowflake) -> String {
        let message = ctx.message();
        if let Some(guild) = guild {
            let member = message
                .member_mentions
                .iter()
                .find(|m| m.id() == id)
                .or_else(|| guild.get_member(id));
            if let Some(member) = member {
                let name = if self.use_nicknames { member.display_name() } else { member.name() };
                return format!("@{name}");
            }
        }
        message
            .mentions
            .iter()
            .find(|u| u.id == id)
            .or_else(|| guild.is_none().then(|| cache.get_user(id)).flatten())
            .map_or_else(|| "@deleted-user".to_string(), |u| format!("@{}", u.name))
    }

    fn role(ctx: &Context, guild: Option<&Guild>, id: Snowflake) -> String {
        let Some(guild) = guild else {
            return "@deleted-role".to_string();
        };
        ctx.message()
            .role_mentions
            .iter()
            .find(|r| r.id == id)
            .or_else(|| guild.get_role(id))
            .map_or_else(|| "@deleted-role".to_string(), |r| format!("@{}", r.name))
    }

    fn channel(&self, guild: Option<&Guild>, id: Snowflake) -> String {
        match guild {
            Some(guild) if self.fix_channel_mentions => guild
                .get_channel(id)
                .map_or_else(|| "#deleted-channel".to_string(), |c| format!("#{}", c.name)),
            _ => format!("<#{id}>"),
        }
    }
}

#[async_trait]
impl Converter for CleanContentConverter {
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult {
        let cache = ctx.cache();
        let guild = ctx.guild();
        let guild = guild.as_ref();

        let replaced = INLINE_MENTION.replace_all(argument, |caps: &Captures<'_>| {
            let Some(id) = caps.get(2).and_then(|m| Snowflake::parse(m.as_str())) else {
                return caps[0].to_string();
            };
            match &caps[1] {
                "@" | "@!" => self.member(ctx, guild, &cache, id),
                "@&" => Self::role(ctx, guild, id),
                _ => self.channel(guild, id),
            }
        });

        let result = if self.escape_markdown {
            escape_markdown(&replaced)
        } else if self.remove_markdown {
            remove_markdown(&replaced)
        } else {
            replaced.into_owned()
        };
        Ok(Value::Str(escape_mentions(&result)))
    }
}
