//! Domain entities that commands can take as arguments.
//!
//! These are plain snapshots. The session owns the live cache; converters
//! hand out clones of what they found.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::snowflake::Snowflake;

/// Splits `name#1234` into `("name", "1234")`.
///
/// The token must be longer than five characters and have `#` exactly five
/// characters from the end; the discriminator itself is not validated.
#[must_use]
pub fn split_tag(token: &str) -> Option<(&str, &str)> {
    let (hash, _) = token.char_indices().rev().nth(4)?;
    if token[..hash].is_empty() || !token[hash..].starts_with('#') {
        return None;
    }
    Some((&token[..hash], &token[hash + 1..]))
}

/// A platform account.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct User {
    /// Account ID.
    pub id: Snowflake,
    /// Account name.
    pub name: String,
    /// Four digit discriminator, `"0000"` when unused.
    pub discriminator: String,
    /// Whether the account is automated.
    pub bot: bool,
}

impl User {
    /// Creates a human user.
    #[must_use]
    pub fn new(id: impl Into<Snowflake>, name: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            discriminator: discriminator.into(),
            bot: false,
        }
    }

    /// Marks the user as a bot.
    #[must_use]
    pub fn with_bot(mut self, bot: bool) -> Self {
        self.bot = bot;
        self
    }

    /// `<@ID>` mention syntax.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// `name#discriminator`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{}#{}", self.name, self.discriminator)
    }
}

/// A user's membership in one guild.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Member {
    /// The underlying account.
    pub user: User,
    /// Guild the membership belongs to.
    pub guild_id: Snowflake,
    /// Guild-specific nickname.
    pub nick: Option<String>,
    /// Roles held, by ID.
    pub roles: Vec<Snowflake>,
}

impl Member {
    /// Creates a member without nickname or roles.
    #[must_use]
    pub fn new(user: User, guild_id: impl Into<Snowflake>) -> Self {
        Self {
            user,
            guild_id: guild_id.into(),
            nick: None,
            roles: Vec::new(),
        }
    }

    /// Sets the nickname.
    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    /// Adds a role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<Snowflake>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// The account ID.
    #[must_use]
    pub fn id(&self) -> Snowflake {
        self.user.id
    }

    /// The account name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Nickname if set, account name otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or(&self.user.name)
    }
}

/// A guild role.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Role {
    /// Role ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Role name.
    pub name: String,
    /// Display colour.
    pub colour: Colour,
}

impl Role {
    /// Creates a role with the default colour.
    #[must_use]
    pub fn new(id: impl Into<Snowflake>, guild_id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
            colour: Colour::default(),
        }
    }

    /// `<@&ID>` mention syntax.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}

/// Kinds of channel a converter can be asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelKind {
    /// Guild text channel.
    Text,
    /// Guild voice channel.
    Voice,
    /// Guild stage channel.
    Stage,
    /// Guild category.
    Category,
    /// Guild store channel.
    Store,
    /// Guild news channel (a text channel for conversion purposes).
    News,
    /// Direct message channel.
    Private,
    /// Group direct message channel.
    Group,
}

impl ChannelKind {
    /// Returns true for channels that live inside a guild.
    #[must_use]
    pub const fn is_guild(self) -> bool {
        !matches!(self, Self::Private | Self::Group)
    }
}

/// A channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Channel {
    /// Channel ID.
    pub id: Snowflake,
    /// Owning guild, `None` for private channels.
    pub guild_id: Option<Snowflake>,
    /// Channel name (empty for private channels).
    pub name: String,
    /// Channel kind.
    pub kind: ChannelKind,
}

impl Channel {
    /// Creates a guild channel.
    #[must_use]
    pub fn guild(
        id: impl Into<Snowflake>,
        guild_id: impl Into<Snowflake>,
        name: impl Into<String>,
        kind: ChannelKind,
    ) -> Self {
        Self {
            id: id.into(),
            guild_id: Some(guild_id.into()),
            name: name.into(),
            kind,
        }
    }

    /// Creates a direct message channel.
    #[must_use]
    pub fn private(id: impl Into<Snowflake>) -> Self {
        Self {
            id: id.into(),
            guild_id: None,
            name: String::new(),
            kind: ChannelKind::Private,
        }
    }

    /// `<#ID>` mention syntax.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// A thread under a guild channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thread {
    /// Thread ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Parent channel.
    pub parent_id: Snowflake,
    /// Thread name.
    pub name: String,
}

impl Thread {
    /// Creates a thread.
    #[must_use]
    pub fn new(
        id: impl Into<Snowflake>,
        guild_id: impl Into<Snowflake>,
        parent_id: impl Into<Snowflake>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            parent_id: parent_id.into(),
            name: name.into(),
        }
    }

    /// `<#ID>` mention syntax.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// A message, including the mentions the platform already resolved for it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    /// Message ID.
    pub id: Snowflake,
    /// Channel the message was posted in.
    pub channel_id: Snowflake,
    /// Guild, `None` in private channels.
    pub guild_id: Option<Snowflake>,
    /// Author.
    pub author: User,
    /// Raw content.
    pub content: String,
    /// Users mentioned in the content.
    pub mentions: Vec<User>,
    /// Members mentioned in the content (guild messages only).
    pub member_mentions: Vec<Member>,
    /// Roles mentioned in the content.
    pub role_mentions: Vec<Role>,
}

impl Message {
    /// Creates a message with no mentions.
    #[must_use]
    pub fn new(
        id: impl Into<Snowflake>,
        channel_id: impl Into<Snowflake>,
        author: User,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            guild_id: None,
            author,
            content: content.into(),
            mentions: Vec::new(),
            member_mentions: Vec::new(),
            role_mentions: Vec::new(),
        }
    }

    /// Places the message in a guild.
    #[must_use]
    pub fn in_guild(mut self, guild_id: impl Into<Snowflake>) -> Self {
        self.guild_id = Some(guild_id.into());
        self
    }

    /// Records a resolved user mention.
    #[must_use]
    pub fn with_mention(mut self, user: User) -> Self {
        self.mentions.push(user);
        self
    }

    /// Records a resolved member mention (also recorded as a user mention).
    #[must_use]
    pub fn with_member_mention(mut self, member: Member) -> Self {
        self.mentions.push(member.user.clone());
        self.member_mentions.push(member);
        self
    }

    /// Records a resolved role mention.
    #[must_use]
    pub fn with_role_mention(mut self, role: Role) -> Self {
        self.role_mentions.push(role);
        self
    }

    /// Drops the content and mentions, keeping only the reference.
    #[must_use]
    pub fn to_partial(&self) -> PartialMessage {
        PartialMessage {
            id: self.id,
            channel_id: self.channel_id,
            guild_id: self.guild_id,
        }
    }
}

/// A reference to a message that has not been fetched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialMessage {
    /// Message ID.
    pub id: Snowflake,
    /// Channel the message lives in.
    pub channel_id: Snowflake,
    /// Guild, `None` in private channels.
    pub guild_id: Option<Snowflake>,
}

/// A custom guild emoji.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Emoji {
    /// Emoji ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Emoji name.
    pub name: String,
    /// Whether the emoji is animated.
    pub animated: bool,
}

impl Emoji {
    /// Creates a static emoji.
    #[must_use]
    pub fn new(id: impl Into<Snowflake>, guild_id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
            animated: false,
        }
    }

    /// `<:name:ID>` or `<a:name:ID>`.
    #[must_use]
    pub fn mention(&self) -> String {
        let prefix = if self.animated { "a" } else { "" };
        format!("<{prefix}:{}:{}>", self.name, self.id)
    }
}

/// An emoji known only from its mention syntax.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartialEmoji {
    /// Emoji ID.
    pub id: Snowflake,
    /// Emoji name.
    pub name: String,
    /// Whether the emoji is animated.
    pub animated: bool,
}

/// A guild sticker.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sticker {
    /// Sticker ID.
    pub id: Snowflake,
    /// Owning guild.
    pub guild_id: Snowflake,
    /// Sticker name.
    pub name: String,
}

impl Sticker {
    /// Creates a sticker.
    #[must_use]
    pub fn new(id: impl Into<Snowflake>, guild_id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            guild_id: guild_id.into(),
            name: name.into(),
        }
    }
}

/// A resolved invite.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Invite {
    /// Invite code.
    pub code: String,
    /// Guild the invite leads to.
    pub guild_id: Option<Snowflake>,
    /// Channel the invite leads to.
    pub channel_id: Option<Snowflake>,
}

/// Identity of a guild, detached from its cached contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuildInfo {
    /// Guild ID.
    pub id: Snowflake,
    /// Guild name.
    pub name: String,
}

/// A bare ID with no further information.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object {
    /// The ID.
    pub id: Snowflake,
}

/// An activity name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    /// Activity name.
    pub name: String,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user)
    }
}
