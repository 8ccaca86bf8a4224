//! A small guild world shared by the conversion tests.

use std::sync::Arc;

use argot_convert::Context;
use argot_foundation::{Channel, ChannelKind, Emoji, Member, Message, Role, Sticker, Thread, User};
use argot_session::{Cache, Guild, MemoryRemote, Session};

pub const GUILD: u64 = 100_000_000_000_000_001;
pub const ANNEX: u64 = 100_000_000_000_000_002;

pub const ALICE: u64 = 200_000_000_000_000_001;
pub const BOB: u64 = 200_000_000_000_000_002;
pub const DAVE: u64 = 200_000_000_000_000_004;
pub const AUTHOR: u64 = 200_000_000_000_000_009;

pub const GENERAL: u64 = 300_000_000_000_000_001;
pub const LOUNGE: u64 = 300_000_000_000_000_002;
pub const STAGE: u64 = 300_000_000_000_000_005;
pub const INFO: u64 = 300_000_000_000_000_007;
pub const BUGS: u64 = 300_000_000_000_000_010;
pub const DM: u64 = 300_000_000_000_000_099;

pub const MODS: u64 = 400_000_000_000_000_001;
pub const BLOB: u64 = 500_000_000_000_000_001;
pub const WAVE: u64 = 600_000_000_000_000_001;

pub fn author() -> User {
    User::new(AUTHOR, "author", "0009")
}

/// `bob` is named after alice's ID, so ID lookups and name lookups disagree.
///
/// Every other entity kind has a decoy of the same kind named after its ID.
pub fn guild() -> Guild {
    Guild::new(GUILD, "argot")
        .with_member(Member::new(User::new(ALICE, "alice", "0001"), GUILD).with_nick("Ally"))
        .with_member(Member::new(User::new(BOB, ALICE.to_string(), "0002"), GUILD))
        .with_member(Member::new(author(), GUILD))
        .with_role(Role::new(MODS, GUILD, "mods"))
        .with_role(Role::new(decoy(MODS), GUILD, MODS.to_string()))
        .with_channel(Channel::guild(GENERAL, GUILD, "general", ChannelKind::Text))
        .with_channel(Channel::guild(decoy(GENERAL), GUILD, GENERAL.to_string(), ChannelKind::Text))
        .with_channel(Channel::guild(LOUNGE, GUILD, "lounge", ChannelKind::Voice))
        .with_channel(Channel::guild(decoy(LOUNGE), GUILD, LOUNGE.to_string(), ChannelKind::Voice))
        .with_channel(Channel::guild(STAGE, GUILD, "stage", ChannelKind::Stage))
        .with_channel(Channel::guild(decoy(STAGE), GUILD, STAGE.to_string(), ChannelKind::Stage))
        .with_channel(Channel::guild(INFO, GUILD, "info", ChannelKind::Category))
        .with_channel(Channel::guild(decoy(INFO), GUILD, INFO.to_string(), ChannelKind::Category))
        .with_thread(Thread::new(BUGS, GUILD, GENERAL, "bugs"))
        .with_thread(Thread::new(decoy(BUGS), GUILD, GENERAL, BUGS.to_string()))
        .with_emoji(Emoji::new(BLOB, GUILD, "blob"))
        .with_emoji(Emoji::new(decoy(BLOB), GUILD, BLOB.to_string()))
        .with_sticker(Sticker::new(WAVE, GUILD, "wave"))
        .with_sticker(Sticker::new(decoy(WAVE), GUILD, WAVE.to_string()))
}

/// The ID of the decoy named after `id`.
pub const fn decoy(id: u64) -> u64 {
    id + 50
}

/// A second guild named after the first one's ID.
pub fn annex() -> Guild {
    Guild::new(ANNEX, GUILD.to_string())
}

/// Members only the remote side knows about.
pub fn remote() -> MemoryRemote {
    MemoryRemote::new().with_member(Member::new(User::new(DAVE, "dave", "0004"), GUILD).with_nick("D"))
}

pub fn session(remote: Arc<MemoryRemote>) -> Arc<Session> {
    let cache = Cache::new()
        .with_guild(guild())
        .with_guild(annex())
        .with_private_channel(Channel::private(DM));
    Arc::new(Session::new(cache, remote))
}

pub fn guild_ctx(args: &str) -> Context {
    let message = Message::new(700_000_000_000_000_001_u64, GENERAL, author(), "").in_guild(GUILD);
    Context::new(session(Arc::new(remote())), message).with_args(args)
}

pub fn dm_ctx(args: &str) -> Context {
    let message = Message::new(700_000_000_000_000_002_u64, DM, author(), "");
    Context::new(session(Arc::new(remote())), message).with_args(args)
}
