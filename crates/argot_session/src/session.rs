//! The session: cache plus remote.
//!
//! Converters read a [`Cache`] snapshot and only go through the session for
//! remote lookups. Whether a fetched member is admitted into the cache is
//! decided here, from [`SessionConfig::member_cache`].

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, instrument};

use argot_foundation::{Invite, Member, Message, Snowflake, User};

use crate::cache::Cache;
use crate::config::SessionConfig;
use crate::remote::{MemberQuery, Remote, RemoteResult};

/// Owner of the entity cache and the remote connection.
pub struct Session {
    cache: RwLock<Cache>,
    remote: Arc<dyn Remote>,
    config: SessionConfig,
}

impl Session {
    /// Creates a session over an initial cache.
    #[must_use]
    pub fn new(cache: Cache, remote: Arc<dyn Remote>) -> Self {
        Self {
            cache: RwLock::new(cache),
            remote,
            config: SessionConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// A snapshot of the cache. O(1).
    #[must_use]
    pub fn cache(&self) -> Cache {
        self.cache.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Applies `f` to the cache and stores the result.
    pub fn update_cache(&self, f: impl FnOnce(Cache) -> Cache) {
        let mut guard = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let current = std::mem::take(&mut *guard);
        *guard = f(current);
    }

    /// Returns true if the gateway connection for `shard_id` is throttled.
    #[must_use]
    pub fn is_ratelimited(&self, shard_id: u32) -> bool {
        self.remote.is_ratelimited(shard_id)
    }

    /// Returns true if the shard serving `guild_id` is throttled.
    #[must_use]
    pub fn is_guild_ratelimited(&self, guild_id: Snowflake) -> bool {
        let shard_id = self.config.shard_for(guild_id);
        let throttled = self.remote.is_ratelimited(shard_id);
        if throttled {
            debug!(%guild_id, shard_id, "shard throttled");
        }
        throttled
    }

    /// Bulk member query. Results are admitted into the cache when the
    /// member cache policy allows it.
    #[instrument(skip(self), level = "debug")]
    pub async fn query_members(&self, guild_id: Snowflake, query: MemberQuery) -> RemoteResult<Vec<Member>> {
        let members = self.remote.query_members(guild_id, query).await?;
        debug!(count = members.len(), "member query returned");
        if self.config.member_cache.joined && !members.is_empty() {
            let admitted = members.clone();
            self.update_cache(|cache| admitted.into_iter().fold(cache, Cache::with_member));
        }
        Ok(members)
    }

    /// Fetches one member. The result is admitted into the cache when the
    /// member cache policy allows it.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_member(&self, guild_id: Snowflake, user_id: Snowflake) -> RemoteResult<Member> {
        let member = self.remote.fetch_member(guild_id, user_id).await?;
        if self.config.member_cache.joined {
            let admitted = member.clone();
            self.update_cache(|cache| cache.with_member(admitted));
        }
        Ok(member)
    }

    /// Fetches a user. Fetched users are not cached.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_user(&self, user_id: Snowflake) -> RemoteResult<User> {
        self.remote.fetch_user(user_id).await
    }

    /// Fetches a message from a channel's history.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_message(&self, channel_id: Snowflake, message_id: Snowflake) -> RemoteResult<Message> {
        self.remote.fetch_message(channel_id, message_id).await
    }

    /// Resolves an invite.
    #[instrument(skip(self), level = "debug")]
    pub async fn fetch_invite(&self, code: &str) -> RemoteResult<Invite> {
        self.remote.fetch_invite(code).await
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
