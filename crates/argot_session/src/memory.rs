//! In-process [`Remote`] backed by tables.
//!
//! Used by tests, benches, and demos. Every primitive counts its calls so
//! callers can assert which lookup path was taken.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tracing::trace;

use argot_foundation::{Invite, Member, Message, Snowflake, User};

use crate::remote::{MemberQuery, Remote, RemoteError, RemoteResult};

/// Per-primitive call counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoteCalls {
    /// Gateway member queries.
    pub query_members: usize,
    /// HTTP member fetches.
    pub fetch_member: usize,
    /// HTTP user fetches.
    pub fetch_user: usize,
    /// HTTP message fetches.
    pub fetch_message: usize,
    /// HTTP invite fetches.
    pub fetch_invite: usize,
}

#[derive(Debug, Default)]
struct Counters {
    query_members: AtomicUsize,
    fetch_member: AtomicUsize,
    fetch_user: AtomicUsize,
    fetch_message: AtomicUsize,
    fetch_invite: AtomicUsize,
}

/// A remote that answers from in-memory tables.
#[derive(Debug, Default)]
pub struct MemoryRemote {
    members: BTreeMap<(Snowflake, Snowflake), Member>,
    users: BTreeMap<Snowflake, User>,
    messages: BTreeMap<(Snowflake, Snowflake), Message>,
    forbidden_channels: BTreeSet<Snowflake>,
    invites: BTreeMap<String, Invite>,
    throttled: AtomicBool,
    throttled_shards: RwLock<BTreeSet<u32>>,
    calls: Counters,
}

impl MemoryRemote {
    /// Creates an empty remote.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member (and its user).
    #[must_use]
    pub fn with_member(mut self, member: Member) -> Self {
        self.users.insert(member.id(), member.user.clone());
        self.members.insert((member.guild_id, member.id()), member);
        self
    }

    /// Adds a user.
    #[must_use]
    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    /// Adds a message to its channel's history.
    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.insert((message.channel_id, message.id), message);
        self
    }

    /// Makes a channel's history unreadable.
    #[must_use]
    pub fn with_forbidden_channel(mut self, channel_id: impl Into<Snowflake>) -> Self {
        self.forbidden_channels.insert(channel_id.into());
        self
    }

    /// Adds an invite.
    #[must_use]
    pub fn with_invite(mut self, invite: Invite) -> Self {
        self.invites.insert(invite.code.clone(), invite);
        self
    }

    /// Throttles (or un-throttles) the gateway on every shard.
    pub fn set_ratelimited(&self, throttled: bool) {
        self.throttled.store(throttled, Ordering::SeqCst);
    }

    /// Throttles (or un-throttles) the gateway on one shard.
    pub fn set_shard_ratelimited(&self, shard_id: u32, throttled: bool) {
        let mut shards = self.throttled_shards.write().unwrap_or_else(PoisonError::into_inner);
        if throttled {
            shards.insert(shard_id);
        } else {
            shards.remove(&shard_id);
        }
    }

    /// Call counts so far.
    #[must_use]
    pub fn calls(&self) -> RemoteCalls {
        RemoteCalls {
            query_members: self.calls.query_members.load(Ordering::SeqCst),
            fetch_member: self.calls.fetch_member.load(Ordering::SeqCst),
            fetch_user: self.calls.fetch_user.load(Ordering::SeqCst),
            fetch_message: self.calls.fetch_message.load(Ordering::SeqCst),
            fetch_invite: self.calls.fetch_invite.load(Ordering::SeqCst),
        }
    }
}

/// Extracts the code from an invite URL, or returns the token unchanged.
#[must_use]
pub fn invite_code(url_or_code: &str) -> &str {
    const PREFIXES: [&str; 3] = ["discord.gg/", "discord.com/invite/", "discordapp.com/invite/"];
    let rest = url_or_code
        .strip_prefix("https://")
        .or_else(|| url_or_code.strip_prefix("http://"))
        .unwrap_or(url_or_code);
    PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
        .filter(|code| !code.is_empty())
        .unwrap_or(url_or_code)
}

fn matches_prefix(member: &Member, prefix: &str) -> bool {
    let prefix = prefix.to_lowercase();
    member.user.name.to_lowercase().starts_with(&prefix)
        || member
            .nick
            .as_deref()
            .is_some_and(|nick| nick.to_lowercase().starts_with(&prefix))
}

#[async_trait]
impl Remote for MemoryRemote {
    fn is_ratelimited(&self, shard_id: u32) -> bool {
        self.throttled.load(Ordering::SeqCst)
            || self
                .throttled_shards
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .contains(&shard_id)
    }

    async fn query_members(&self, guild_id: Snowflake, query: MemberQuery) -> RemoteResult<Vec<Member>> {
        self.calls.query_members.fetch_add(1, Ordering::SeqCst);
        trace!(%guild_id, ?query, "query_members");
        let found = self
            .members
            .range((guild_id, Snowflake::new(0))..=(guild_id, Snowflake::new(u64::MAX)))
            .map(|(_, member)| member)
            .filter(|member| {
                if query.user_ids.is_empty() {
                    query.query.as_deref().is_some_and(|q| matches_prefix(member, q))
                } else {
                    query.user_ids.contains(&member.id())
                }
            })
            .take(query.limit)
            .cloned()
            .collect();
        Ok(found)
    }

    async fn fetch_member(&self, guild_id: Snowflake, user_id: Snowflake) -> RemoteResult<Member> {
        self.calls.fetch_member.fetch_add(1, Ordering::SeqCst);
        self.members
            .get(&(guild_id, user_id))
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("member {user_id}")))
    }

    async fn fetch_user(&self, user_id: Snowflake) -> RemoteResult<User> {
        self.calls.fetch_user.fetch_add(1, Ordering::SeqCst);
        self.users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("user {user_id}")))
    }

    async fn fetch_message(&self, channel_id: Snowflake, message_id: Snowflake) -> RemoteResult<Message> {
        self.calls.fetch_message.fetch_add(1, Ordering::SeqCst);
        if self.forbidden_channels.contains(&channel_id) {
            return Err(RemoteError::Forbidden(format!("channel {channel_id}")));
        }
        self.messages
            .get(&(channel_id, message_id))
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("message {message_id}")))
    }

    async fn fetch_invite(&self, code: &str) -> RemoteResult<Invite> {
        self.calls.fetch_invite.fetch_add(1, Ordering::SeqCst);
        let code = invite_code(code);
        self.invites
            .get(code)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(format!("invite {code}")))
    }
}
