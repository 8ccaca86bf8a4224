//! Guild scopes.
//!
//! A [`Guild`] is the container most lookups are scoped to. Like the rest of
//! the cache it is a persistent value: `with_*` methods return a new guild
//! that shares structure with the old one.

use argot_foundation::{
    Channel, Emoji, GuildInfo, Member, Role, Snowflake, Sticker, Thread, split_tag,
};
use im::OrdMap;

/// A channel-like target that messages can be read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelRef {
    /// A regular channel (guild or private).
    Channel(Channel),
    /// A thread under a guild channel.
    Thread(Thread),
}

impl ChannelRef {
    /// The channel or thread ID.
    #[must_use]
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Channel(c) => c.id,
            Self::Thread(t) => t.id,
        }
    }

    /// The owning guild, `None` for private channels.
    #[must_use]
    pub fn guild_id(&self) -> Option<Snowflake> {
        match self {
            Self::Channel(c) => c.guild_id,
            Self::Thread(t) => Some(t.guild_id),
        }
    }

    /// `<#ID>` mention syntax.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id())
    }

    /// The name, empty for private channels.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Channel(c) => &c.name,
            Self::Thread(t) => &t.name,
        }
    }
}

impl From<Channel> for ChannelRef {
    fn from(channel: Channel) -> Self {
        Self::Channel(channel)
    }
}

impl From<Thread> for ChannelRef {
    fn from(thread: Thread) -> Self {
        Self::Thread(thread)
    }
}

/// A cached guild and everything scoped to it.
///
/// Collections iterate in ascending ID order, which is also creation order
/// for snowflake IDs.
#[derive(Clone, Debug)]
pub struct Guild {
    info: GuildInfo,
    members: OrdMap<Snowflake, Member>,
    roles: OrdMap<Snowflake, Role>,
    channels: OrdMap<Snowflake, Channel>,
    threads: OrdMap<Snowflake, Thread>,
    emojis: OrdMap<Snowflake, Emoji>,
    stickers: OrdMap<Snowflake, Sticker>,
}

impl Guild {
    /// Creates an empty guild.
    #[must_use]
    pub fn new(id: impl Into<Snowflake>, name: impl Into<String>) -> Self {
        Self {
            info: GuildInfo {
                id: id.into(),
                name: name.into(),
            },
            members: OrdMap::new(),
            roles: OrdMap::new(),
            channels: OrdMap::new(),
            threads: OrdMap::new(),
            emojis: OrdMap::new(),
            stickers: OrdMap::new(),
        }
    }

    /// Adds or replaces a member.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.insert(member.id(), member);
        self
    }

    /// Removes a member.
    #[must_use]
    pub fn without_member(mut self, id: Snowflake) -> Self {
        self.members.remove(&id);
        self
    }

    /// Adds or replaces a role.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role.id, role);
        self
    }

    /// Adds or replaces a channel.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.insert(channel.id, channel);
        self
    }

    /// Adds or replaces a thread.
    #[must_use]
    pub fn with_thread(mut self, thread: Thread) -> Self {
        self.threads.insert(thread.id, thread);
        self
    }

    /// Adds or replaces an emoji.
    #[must_use]
    pub fn with_emoji(mut self, emoji: Emoji) -> Self {
        self.emojis.insert(emoji.id, emoji);
        self
    }

    /// Adds or replaces a sticker.
    #[must_use]
    pub fn with_sticker(mut self, sticker: Sticker) -> Self {
        self.stickers.insert(sticker.id, sticker);
        self
    }

    /// Guild identity.
    #[must_use]
    pub fn info(&self) -> &GuildInfo {
        &self.info
    }

    /// Guild ID.
    #[must_use]
    pub fn id(&self) -> Snowflake {
        self.info.id
    }

    /// Guild name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    // --- Members ---

    /// Looks up a member by ID.
    #[must_use]
    pub fn get_member(&self, id: Snowflake) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Looks up a member by `name#discriminator`, then name, then nickname.
    ///
    /// A tagged lookup that finds nothing falls back to matching the whole
    /// token as a name or nickname.
    #[must_use]
    pub fn get_member_named(&self, name: &str) -> Option<&Member> {
        if let Some((username, discriminator)) = split_tag(name) {
            let tagged = self
                .members()
                .find(|m| m.user.name == username && m.user.discriminator == discriminator);
            if tagged.is_some() {
                return tagged;
            }
        }
        self.members()
            .find(|m| m.nick.as_deref() == Some(name) || m.user.name == name)
    }

    /// Iterates cached members.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Number of cached members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    // --- Roles ---

    /// Looks up a role by ID.
    #[must_use]
    pub fn get_role(&self, id: Snowflake) -> Option<&Role> {
        self.roles.get(&id)
    }

    /// Iterates roles.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    // --- Channels ---

    /// Looks up a channel (not a thread) by ID.
    #[must_use]
    pub fn get_channel(&self, id: Snowflake) -> Option<&Channel> {
        self.channels.get(&id)
    }

    /// Iterates channels.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.values()
    }

    /// Looks up a thread by ID.
    #[must_use]
    pub fn get_thread(&self, id: Snowflake) -> Option<&Thread> {
        self.threads.get(&id)
    }

    /// Iterates threads.
    pub fn threads(&self) -> impl Iterator<Item = &Thread> {
        self.threads.values()
    }

    /// Looks up a channel or thread by ID.
    #[must_use]
    pub fn resolve_channel(&self, id: Snowflake) -> Option<ChannelRef> {
        self.get_channel(id)
            .cloned()
            .map(ChannelRef::Channel)
            .or_else(|| self.get_thread(id).cloned().map(ChannelRef::Thread))
    }

    // --- Emojis and stickers ---

    /// Looks up an emoji by ID.
    #[must_use]
    pub fn get_emoji(&self, id: Snowflake) -> Option<&Emoji> {
        self.emojis.get(&id)
    }

    /// Iterates emojis.
    pub fn emojis(&self) -> impl Iterator<Item = &Emoji> {
        self.emojis.values()
    }

    /// Looks up a sticker by ID.
    #[must_use]
    pub fn get_sticker(&self, id: Snowflake) -> Option<&Sticker> {
        self.stickers.get(&id)
    }

    /// Iterates stickers.
    pub fn stickers(&self) -> impl Iterator<Item = &Sticker> {
        self.stickers.values()
    }
}
