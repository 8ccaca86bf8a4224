//! A small populated session for converter tests.

use std::sync::Arc;

use argot_foundation::{Channel, ChannelKind, Emoji, Error, Invite, Member, Message, Role, Sticker, Thread, User};
use argot_session::{Cache, Guild, MemoryRemote, Session};

use crate::context::Context;
use crate::converter::ConverterError;

pub const GUILD: u64 = 100_000_000_000_000_001;
pub const OTHER_GUILD: u64 = 100_000_000_000_000_002;

pub const ALICE: u64 = 200_000_000_000_000_001;
pub const BOB: u64 = 200_000_000_000_000_002;
pub const CAROL: u64 = 200_000_000_000_000_003;
pub const DAVE: u64 = 200_000_000_000_000_004;
pub const EVE: u64 = 200_000_000_000_000_005;
pub const AUTHOR: u64 = 200_000_000_000_000_009;

pub const GENERAL: u64 = 300_000_000_000_000_001;
pub const LOUNGE: u64 = 300_000_000_000_000_002;
pub const INFO: u64 = 300_000_000_000_000_003;
pub const SECRET: u64 = 300_000_000_000_000_004;
pub const BUGS: u64 = 300_000_000_000_000_010;
pub const OTHER_GENERAL: u64 = 300_000_000_000_000_101;
pub const DM: u64 = 300_000_000_000_000_900;

pub const MODS: u64 = 350_000_000_000_000_001;

pub const BLOB: u64 = 400_000_000_000_000_001;
pub const PARTY: u64 = 400_000_000_000_000_002;
pub const WAVE: u64 = 500_000_000_000_000_001;

pub const CACHED_MESSAGE: u64 = 600_000_000_000_000_001;
pub const REMOTE_MESSAGE: u64 = 600_000_000_000_000_002;
pub const INVOCATION: u64 = 600_000_000_000_000_009;

pub fn user(id: u64, name: &str, discriminator: &str) -> User {
    User::new(id, name, discriminator)
}

pub fn author() -> User {
    user(AUTHOR, "author", "9999")
}

pub fn cache() -> Cache {
    let guild = Guild::new(GUILD, "Argot HQ")
        .with_member(Member::new(user(ALICE, "alice", "0001"), GUILD).with_nick("Ally"))
        .with_member(Member::new(user(BOB, "bob", "0002"), GUILD))
        .with_member(Member::new(author(), GUILD))
        .with_role(Role::new(MODS, GUILD, "mods"))
        .with_channel(Channel::guild(GENERAL, GUILD, "general", ChannelKind::Text))
        .with_channel(Channel::guild(LOUNGE, GUILD, "lounge", ChannelKind::Voice))
        .with_channel(Channel::guild(INFO, GUILD, "info", ChannelKind::Category))
        .with_channel(Channel::guild(SECRET, GUILD, "secret", ChannelKind::Text))
        .with_thread(Thread::new(BUGS, GUILD, GENERAL, "bugs"))
        .with_emoji(Emoji::new(BLOB, GUILD, "blob"))
        .with_sticker(Sticker::new(WAVE, GUILD, "wave"));
    let other = Guild::new(OTHER_GUILD, "Elsewhere")
        .with_member(Member::new(user(CAROL, "carol", "0003"), OTHER_GUILD))
        .with_channel(Channel::guild(OTHER_GENERAL, OTHER_GUILD, "general", ChannelKind::Text))
        .with_emoji(Emoji::new(PARTY, OTHER_GUILD, "party"));
    Cache::new()
        .with_guild(guild)
        .with_guild(other)
        .with_private_channel(Channel::private(DM))
        .with_message(Message::new(CACHED_MESSAGE, GENERAL, user(BOB, "bob", "0002"), "hello").in_guild(GUILD))
}

pub fn remote() -> MemoryRemote {
    MemoryRemote::new()
        .with_member(Member::new(user(DAVE, "dave", "0004"), GUILD).with_nick("D"))
        .with_user(user(EVE, "eve", "0005"))
        .with_message(Message::new(REMOTE_MESSAGE, GENERAL, user(ALICE, "alice", "0001"), "remote").in_guild(GUILD))
        .with_forbidden_channel(SECRET)
        .with_invite(Invite {
            code: "argot".to_string(),
            guild_id: Some(GUILD.into()),
            channel_id: Some(GENERAL.into()),
        })
}

pub fn session_with(remote: Arc<MemoryRemote>) -> Arc<Session> {
    Arc::new(Session::new(cache(), remote))
}

pub fn guild_message() -> Message {
    Message::new(INVOCATION, GENERAL, author(), "").in_guild(GUILD)
}

pub fn dm_message() -> Message {
    Message::new(INVOCATION, DM, author(), "")
}

/// A context in the first guild's general channel.
pub fn guild_ctx() -> Context {
    Context::new(session_with(Arc::new(remote())), guild_message())
}

/// A context in a direct message channel.
pub fn dm_ctx() -> Context {
    Context::new(session_with(Arc::new(remote())), dm_message())
}

/// The structured error inside a converter failure.
pub fn command_error(err: ConverterError) -> Error {
    match err {
        ConverterError::Command(err) => err,
        ConverterError::Unexpected(err) => panic!("expected a structured error, got {err}"),
    }
}
