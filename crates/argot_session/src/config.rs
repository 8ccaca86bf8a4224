//! Session configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which remotely fetched members the session keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemberCacheFlags {
    /// Keep members of joined guilds, including ones fetched on demand.
    pub joined: bool,
}

impl MemberCacheFlags {
    /// Caches every member.
    #[must_use]
    pub const fn all() -> Self {
        Self { joined: true }
    }

    /// Caches nothing that was fetched on demand.
    #[must_use]
    pub const fn none() -> Self {
        Self { joined: false }
    }
}

impl Default for MemberCacheFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Configuration for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    /// Member retention policy.
    pub member_cache: MemberCacheFlags,
    /// Number of gateway shards.
    pub shard_count: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            member_cache: MemberCacheFlags::all(),
            shard_count: 1,
        }
    }
}

impl SessionConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the member retention policy.
    #[must_use]
    pub fn with_member_cache(mut self, flags: MemberCacheFlags) -> Self {
        self.member_cache = flags;
        self
    }

    /// Sets the shard count. Zero is treated as one.
    #[must_use]
    pub fn with_shard_count(mut self, shard_count: u32) -> Self {
        self.shard_count = shard_count.max(1);
        self
    }

    /// The shard serving `guild_id` under the platform's sharding formula.
    #[must_use]
    pub fn shard_for(&self, guild_id: argot_foundation::Snowflake) -> u32 {
        let shards = u64::from(self.shard_count.max(1));
        // shards is at most u32::MAX so the remainder fits
        u32::try_from((guild_id.get() >> 22) % shards).unwrap_or(0)
    }
}
