//! Immutable entity cache with structural sharing.
//!
//! The `Cache` is what the session knows without asking the remote side.
//! It uses persistent data structures, so cloning a snapshot is O(1) and
//! lookups never hold a lock across an await point.

use argot_foundation::{Channel, Emoji, Member, Message, Snowflake, Sticker, User};
use im::{OrdMap, Vector};

use crate::guild::{ChannelRef, Guild};

/// Snapshot of every entity the session has cached.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    users: OrdMap<Snowflake, User>,
    guilds: OrdMap<Snowflake, Guild>,
    /// Guild IDs in join order.
    guild_order: Vector<Snowflake>,
    private_channels: OrdMap<Snowflake, Channel>,
    messages: OrdMap<Snowflake, Message>,
    /// Global emoji index, emoji ID to owning guild.
    emoji_index: OrdMap<Snowflake, Snowflake>,
    /// Global sticker index, sticker ID to owning guild.
    sticker_index: OrdMap<Snowflake, Snowflake>,
}

impl Cache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Mutation (returns new snapshots) ---

    /// Adds or replaces a user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    /// Adds or replaces a guild.
    ///
    /// A new guild is appended to the join order; a replaced guild keeps its
    /// position. Member accounts are added to the user cache.
    #[must_use]
    pub fn with_guild(mut self, guild: Guild) -> Self {
        let id = guild.id();
        if let Some(old) = self.guilds.get(&id) {
            for emoji in old.emojis() {
                self.emoji_index.remove(&emoji.id);
            }
            for sticker in old.stickers() {
                self.sticker_index.remove(&sticker.id);
            }
        } else {
            self.guild_order.push_back(id);
        }
        for member in guild.members() {
            self.users.insert(member.id(), member.user.clone());
        }
        for emoji in guild.emojis() {
            self.emoji_index.insert(emoji.id, id);
        }
        for sticker in guild.stickers() {
            self.sticker_index.insert(sticker.id, id);
        }
        self.guilds.insert(id, guild);
        self
    }

    /// Adds a member to a cached guild.
    ///
    /// Returns the cache unchanged if the guild is unknown.
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        let Some(guild) = self.guilds.get(&member.guild_id).cloned() else {
            return self;
        };
        self.users.insert(member.id(), member.user.clone());
        self.guilds.insert(guild.id(), guild.with_member(member));
        self
    }

    /// Adds or replaces a direct message channel.
    #[must_use]
    pub fn with_private_channel(mut self, channel: Channel) -> Self {
        self.private_channels.insert(channel.id, channel);
        self
    }

    /// Adds or replaces a message.
    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.insert(message.id, message);
        self
    }

    // --- Users ---

    /// Looks up a user by ID.
    #[must_use]
    pub fn get_user(&self, id: Snowflake) -> Option<&User> {
        self.users.get(&id)
    }

    /// Iterates cached users.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    // --- Guilds ---

    /// Looks up a guild by ID.
    #[must_use]
    pub fn get_guild(&self, id: Snowflake) -> Option<&Guild> {
        self.guilds.get(&id)
    }

    /// Iterates guilds in join order.
    pub fn guilds(&self) -> impl Iterator<Item = &Guild> {
        self.guild_order.iter().filter_map(|id| self.guilds.get(id))
    }

    /// Number of joined guilds.
    #[must_use]
    pub fn guild_count(&self) -> usize {
        self.guild_order.len()
    }

    // --- Channels ---

    /// Looks up any channel or thread by ID, across guilds and private
    /// channels.
    #[must_use]
    pub fn get_channel(&self, id: Snowflake) -> Option<ChannelRef> {
        self.guilds()
            .find_map(|g| g.resolve_channel(id))
            .or_else(|| self.private_channels.get(&id).cloned().map(ChannelRef::Channel))
    }

    /// Iterates every guild channel, guild by guild in join order.
    pub fn all_channels(&self) -> impl Iterator<Item = &Channel> {
        self.guilds().flat_map(Guild::channels)
    }

    /// Looks up a direct message channel by ID.
    #[must_use]
    pub fn get_private_channel(&self, id: Snowflake) -> Option<&Channel> {
        self.private_channels.get(&id)
    }

    // --- Messages ---

    /// Looks up a cached message by ID.
    #[must_use]
    pub fn get_message(&self, id: Snowflake) -> Option<&Message> {
        self.messages.get(&id)
    }

    // --- Emojis and stickers ---

    /// Looks up an emoji by ID across every guild.
    #[must_use]
    pub fn get_emoji(&self, id: Snowflake) -> Option<&Emoji> {
        let guild = self.emoji_index.get(&id)?;
        self.guilds.get(guild)?.get_emoji(id)
    }

    /// Iterates every emoji, guild by guild in join order.
    pub fn emojis(&self) -> impl Iterator<Item = &Emoji> {
        self.guilds().flat_map(Guild::emojis)
    }

    /// Looks up a sticker by ID across every guild.
    #[must_use]
    pub fn get_sticker(&self, id: Snowflake) -> Option<&Sticker> {
        let guild = self.sticker_index.get(&id)?;
        self.guilds.get(guild)?.get_sticker(id)
    }

    /// Iterates every sticker, guild by guild in join order.
    pub fn stickers(&self) -> impl Iterator<Item = &Sticker> {
        self.guilds().flat_map(Guild::stickers)
    }
}
