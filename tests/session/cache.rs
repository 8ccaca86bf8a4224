//! Integration tests for Cache and Guild
//!
//! Tests snapshot isolation, join order, and scoped lookups.

use argot_foundation::{Channel, ChannelKind, Emoji, Member, Message, Role, Snowflake, Thread, User};
use argot_session::{Cache, ChannelRef, Guild};

const FIRST: u64 = 100_000_000_000_000_002;
const SECOND: u64 = 100_000_000_000_000_001;
const ALICE: u64 = 200_000_000_000_000_001;
const BOB: u64 = 200_000_000_000_000_002;
const GENERAL: u64 = 300_000_000_000_000_001;
const BUGS: u64 = 300_000_000_000_000_002;

fn id(raw: u64) -> Snowflake {
    Snowflake::new(raw)
}

fn first_guild() -> Guild {
    Guild::new(FIRST, "first")
        .with_member(Member::new(User::new(BOB, "bob", "0002"), FIRST).with_nick("sam"))
        .with_member(Member::new(User::new(ALICE, "sam", "0001"), FIRST))
        .with_role(Role::new(400_000_000_000_000_001_u64, FIRST, "mods"))
        .with_channel(Channel::guild(GENERAL, FIRST, "general", ChannelKind::Text))
        .with_thread(Thread::new(BUGS, FIRST, GENERAL, "bugs"))
        .with_emoji(Emoji::new(500_000_000_000_000_001_u64, FIRST, "blob"))
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn snapshots_are_isolated() {
    let before = Cache::new().with_guild(first_guild());
    let after = before
        .clone()
        .with_member(Member::new(User::new(200_000_000_000_000_003_u64, "carol", "0003"), FIRST));
    assert_eq!(before.get_guild(id(FIRST)).map(Guild::member_count), Some(2));
    assert_eq!(after.get_guild(id(FIRST)).map(Guild::member_count), Some(3));
    assert!(before.get_user(id(200_000_000_000_000_003)).is_none());
    assert!(after.get_user(id(200_000_000_000_000_003)).is_some());
}

#[test]
fn members_of_unknown_guilds_are_dropped() {
    let cache = Cache::new().with_member(Member::new(User::new(ALICE, "alice", "0001"), FIRST));
    assert_eq!(cache.guild_count(), 0);
    assert!(cache.get_user(id(ALICE)).is_none());
}

#[test]
fn guilds_iterate_in_join_order() {
    let cache = Cache::new()
        .with_guild(first_guild())
        .with_guild(Guild::new(SECOND, "second"))
        .with_guild(first_guild().with_role(Role::new(400_000_000_000_000_002_u64, FIRST, "admins")));
    let order: Vec<u64> = cache.guilds().map(|g| g.id().get()).collect();
    assert_eq!(order, [FIRST, SECOND]);
    assert_eq!(cache.get_guild(id(FIRST)).map(|g| g.roles().count()), Some(2));
}

// =============================================================================
// Guild Scope
// =============================================================================

#[test]
fn named_member_lookup_takes_lowest_id() {
    let guild = first_guild();
    // alice is named "sam"; bob is nicknamed "sam"
    assert_eq!(guild.get_member_named("sam").map(|m| m.id().get()), Some(ALICE));
    assert_eq!(guild.get_member_named("bob#0002").map(|m| m.id().get()), Some(BOB));
    assert_eq!(guild.get_member_named("sam#9999").map(|m| m.id().get()), None);
}

#[test]
fn channels_and_threads_resolve_together() {
    let cache = Cache::new().with_guild(first_guild());
    assert!(matches!(cache.get_channel(id(GENERAL)), Some(ChannelRef::Channel(ref c)) if c.name == "general"));
    let thread = cache.get_channel(id(BUGS)).unwrap();
    assert!(matches!(thread, ChannelRef::Thread(_)));
    assert_eq!(thread.guild_id(), Some(id(FIRST)));
    assert_eq!(thread.mention(), format!("<#{BUGS}>"));
    assert_eq!(cache.all_channels().count(), 1);
}

#[test]
fn private_channels_are_global() {
    let dm = Channel::private(300_000_000_000_000_009_u64);
    let cache = Cache::new().with_private_channel(dm.clone());
    assert_eq!(cache.get_private_channel(dm.id), Some(&dm));
    assert!(matches!(cache.get_channel(dm.id), Some(ChannelRef::Channel(_))));
}

#[test]
fn emoji_index_follows_guild_replacement() {
    let cache = Cache::new().with_guild(first_guild());
    assert_eq!(cache.get_emoji(id(500_000_000_000_000_001)).map(|e| e.name.as_str()), Some("blob"));
    let cache = cache.with_guild(Guild::new(FIRST, "first"));
    assert!(cache.get_emoji(id(500_000_000_000_000_001)).is_none());
}

#[test]
fn messages_are_keyed_by_id() {
    let message = Message::new(600_000_000_000_000_001_u64, GENERAL, User::new(ALICE, "alice", "0001"), "hi");
    let cache = Cache::new().with_message(message);
    assert_eq!(cache.get_message(id(600_000_000_000_000_001)).map(|m| m.content.as_str()), Some("hi"));
}
