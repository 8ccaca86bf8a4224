//! Remote lookup primitives.
//!
//! The [`Remote`] trait is everything the engine may ask the platform for on
//! a cache miss. Implementations own transport concerns; the engine only
//! sees results and [`RemoteError`]s.

use async_trait::async_trait;
use thiserror::Error;

use argot_foundation::{Invite, Member, Message, Snowflake, User};

/// Failure reported by a remote lookup.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    /// The entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller lacks permission to see the entity.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other HTTP failure.
    #[error("http error {status}: {message}")]
    Http {
        /// Status code.
        status: u16,
        /// Response message.
        message: String,
    },

    /// The request was throttled.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited {
        /// Suggested back-off.
        retry_after_ms: u64,
    },

    /// A gateway query did not complete.
    #[error("gateway query timed out")]
    Timeout,
}

impl RemoteError {
    /// Returns true for failures reported by the HTTP API.
    ///
    /// Gateway timeouts are the only failure that is not.
    #[must_use]
    pub fn is_http(&self) -> bool {
        !matches!(self, Self::Timeout)
    }
}

/// Result type for remote lookups.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// A bulk member query sent over the gateway.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberQuery {
    /// Name prefix to search for.
    pub query: Option<String>,
    /// Exact IDs to request.
    pub user_ids: Vec<Snowflake>,
    /// Maximum number of members to return.
    pub limit: usize,
}

impl MemberQuery {
    /// Queries members whose name starts with `prefix`.
    #[must_use]
    pub fn named(prefix: impl Into<String>, limit: usize) -> Self {
        Self {
            query: Some(prefix.into()),
            user_ids: Vec::new(),
            limit,
        }
    }

    /// Queries members by ID.
    #[must_use]
    pub fn by_ids(user_ids: Vec<Snowflake>, limit: usize) -> Self {
        Self {
            query: None,
            user_ids,
            limit,
        }
    }
}

/// Lookups that go past the local cache.
#[async_trait]
pub trait Remote: Send + Sync {
    /// Returns true if the gateway connection for `shard_id` is throttled.
    fn is_ratelimited(&self, shard_id: u32) -> bool;

    /// Bulk member query over the gateway.
    async fn query_members(&self, guild_id: Snowflake, query: MemberQuery) -> RemoteResult<Vec<Member>>;

    /// Fetches one member over HTTP.
    async fn fetch_member(&self, guild_id: Snowflake, user_id: Snowflake) -> RemoteResult<Member>;

    /// Fetches a user over HTTP.
    async fn fetch_user(&self, user_id: Snowflake) -> RemoteResult<User>;

    /// Fetches a message from a channel's history over HTTP.
    async fn fetch_message(&self, channel_id: Snowflake, message_id: Snowflake) -> RemoteResult<Message>;

    /// Resolves an invite code or URL over HTTP.
    async fn fetch_invite(&self, code: &str) -> RemoteResult<Invite>;
}
