//! Integration tests for entity conversion against a session
//!
//! Tests lookup precedence, mention handling, scope rules, and how remote
//! lookups interact with the cache.

use std::sync::Arc;

use argot_convert::{Context, Parameter, convert_arguments, run_converters};
use argot_foundation::{EntityKind, ErrorKind, Message, Snowflake, Type, Value};
use argot_session::MemoryRemote;
use tracing_test::traced_test;

use crate::fixtures::{
    ALICE, ANNEX, AUTHOR, BLOB, BOB, BUGS, DAVE, GENERAL, GUILD, INFO, LOUNGE, MODS, STAGE, WAVE, author, decoy,
    dm_ctx, guild_ctx, remote, session,
};

async fn convert(ctx: &mut Context, ty: Type, argument: &str) -> argot_foundation::Result<Value> {
    let param = Parameter::new("arg", ty).unwrap();
    run_converters(ctx, param.plan(), argument, &param).await
}

fn member_id(value: &Value) -> u64 {
    value.as_member().map(|m| m.id().get()).unwrap()
}

// =============================================================================
// Lookup Precedence
// =============================================================================

#[tokio::test]
async fn id_precedes_name() {
    let mut ctx = guild_ctx("");
    // bob's account name is alice's ID
    let value = convert(&mut ctx, Type::Member, &ALICE.to_string()).await.unwrap();
    assert_eq!(member_id(&value), ALICE);
    let value = convert(&mut ctx, Type::User, &ALICE.to_string()).await.unwrap();
    assert_eq!(value.as_user().map(|u| u.id.get()), Some(ALICE));
    let value = convert(&mut ctx, Type::Member, "bob#0002").await;
    assert!(value.is_err());
    let value = convert(&mut ctx, Type::Member, &format!("{ALICE}#0002")).await.unwrap();
    assert_eq!(member_id(&value), BOB);
}

fn entity_id(value: &Value) -> u64 {
    match value {
        Value::Role(role) => role.id.get(),
        Value::Channel(channel) => channel.id.get(),
        Value::Thread(thread) => thread.id.get(),
        Value::Emoji(emoji) => emoji.id.get(),
        Value::Sticker(sticker) => sticker.id.get(),
        Value::Guild(info) => info.id.get(),
        other => panic!("unexpected value {other:?}"),
    }
}

#[tokio::test]
async fn ids_beat_names_for_every_entity() {
    let mut ctx = guild_ctx("");
    let cases = [
        (Type::Role, MODS),
        (Type::TextChannel, GENERAL),
        (Type::VoiceChannel, LOUNGE),
        (Type::StageChannel, STAGE),
        (Type::CategoryChannel, INFO),
        (Type::GuildChannel, GENERAL),
        (Type::Thread, BUGS),
        (Type::Emoji, BLOB),
        (Type::Sticker, WAVE),
    ];
    for (ty, id) in cases {
        // the decoy's name is `id` itself
        let value = convert(&mut ctx, ty, &id.to_string()).await.unwrap();
        assert_eq!(entity_id(&value), id, "{ty}");
        let value = convert(&mut ctx, ty, &decoy(id).to_string()).await.unwrap();
        assert_eq!(entity_id(&value), decoy(id), "{ty}");
    }

    let value = convert(&mut ctx, Type::Guild, &GUILD.to_string()).await.unwrap();
    assert_eq!(entity_id(&value), GUILD);
    let value = convert(&mut ctx, Type::Guild, &ANNEX.to_string()).await.unwrap();
    assert_eq!(entity_id(&value), ANNEX);
}

#[tokio::test]
async fn mentions_resolve_like_bare_ids() {
    let mut ctx = guild_ctx("");
    let cases = [
        (Type::Member, ALICE, vec![format!("<@{ALICE}>"), format!("<@!{ALICE}>")]),
        (Type::User, ALICE, vec![format!("<@{ALICE}>"), format!("<@!{ALICE}>")]),
        (Type::Role, MODS, vec![format!("<@&{MODS}>")]),
        (Type::TextChannel, GENERAL, vec![format!("<#{GENERAL}>")]),
        (Type::Emoji, BLOB, vec![format!("<:blob:{BLOB}>"), format!("<a:blob:{BLOB}>")]),
        (Type::Object, ALICE, vec![format!("<@{ALICE}>"), format!("<@&{ALICE}>"), format!("<#{ALICE}>")]),
    ];
    for (ty, id, mentions) in cases {
        let bare = convert(&mut ctx, ty, &id.to_string()).await.unwrap();
        for mention in mentions {
            let value = convert(&mut ctx, ty, &mention).await.unwrap();
            assert_eq!(value, bare, "{ty} {mention}");
        }
    }
}

#[tokio::test]
async fn names_are_exact() {
    let mut ctx = guild_ctx("");
    assert_eq!(member_id(&convert(&mut ctx, Type::Member, "Ally").await.unwrap()), ALICE);
    let err = convert(&mut ctx, Type::Role, "Mods").await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotFound { entity: EntityKind::Role, .. }));
}

// =============================================================================
// Scope
// =============================================================================

#[tokio::test]
async fn channel_kinds_are_enforced() {
    let mut ctx = guild_ctx("");
    assert!(convert(&mut ctx, Type::TextChannel, "lounge").await.is_err());
    assert!(convert(&mut ctx, Type::TextChannel, &LOUNGE.to_string()).await.is_err());
    let voice = convert(&mut ctx, Type::VoiceChannel, "lounge").await.unwrap();
    let any = convert(&mut ctx, Type::GuildChannel, &format!("<#{LOUNGE}>")).await.unwrap();
    assert_eq!(voice, any);
    assert_eq!(voice.value_type(), Type::VoiceChannel);
}

#[tokio::test]
async fn private_messages() {
    let mut ctx = dm_ctx("mods");
    let params = [Parameter::new("role", Type::Role).unwrap()];
    let err = convert_arguments(&mut ctx, &params).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NoPrivateMessage));

    let mut ctx = dm_ctx("");
    let value = convert(&mut ctx, Type::Member, "alice").await.unwrap();
    assert_eq!(member_id(&value), ALICE);
    let value = convert(&mut ctx, Type::Guild, "argot").await.unwrap();
    assert!(matches!(value, Value::Guild(ref info) if info.id == Snowflake::new(GUILD)));
}

// =============================================================================
// Remote Lookups
// =============================================================================

#[tokio::test]
#[traced_test]
async fn throttled_member_query_falls_back_to_fetch() {
    let remote = Arc::new(remote());
    remote.set_ratelimited(true);
    let message = Message::new(700_000_000_000_000_001_u64, GENERAL, author(), "").in_guild(GUILD);
    let mut ctx = Context::new(session(remote.clone()), message);

    let value = convert(&mut ctx, Type::Member, &DAVE.to_string()).await.unwrap();
    assert_eq!(member_id(&value), DAVE);
    assert_eq!(remote.calls().query_members, 0);
    assert_eq!(remote.calls().fetch_member, 1);
    assert!(logs_contain("member query throttled"));
}

#[tokio::test]
async fn queried_members_are_cached() {
    let remote = Arc::new(remote());
    let session = session(remote.clone());
    let message = Message::new(700_000_000_000_000_001_u64, GENERAL, author(), "").in_guild(GUILD);
    let mut ctx = Context::new(session.clone(), message);

    let value = convert(&mut ctx, Type::Member, "D").await.unwrap();
    assert_eq!(member_id(&value), DAVE);
    assert_eq!(remote.calls().query_members, 1);

    let value = convert(&mut ctx, Type::Member, "D").await.unwrap();
    assert_eq!(member_id(&value), DAVE);
    assert_eq!(remote.calls().query_members, 1);
    assert!(session.cache().get_user(Snowflake::new(DAVE)).is_some());
}

#[tokio::test]
async fn unknown_users_are_fetched_then_reported() {
    let remote = Arc::new(MemoryRemote::new());
    let message = Message::new(700_000_000_000_000_002_u64, GENERAL, author(), "");
    let mut ctx = Context::new(session(remote.clone()), message);

    let value = convert(&mut ctx, Type::User, &AUTHOR.to_string()).await.unwrap();
    assert_eq!(value.as_user().map(|u| u.name.as_str()), Some("author"));
    assert_eq!(remote.calls().fetch_user, 0);

    let err = convert(&mut ctx, Type::User, &DAVE.to_string()).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotFound { entity: EntityKind::User, .. }));
    assert_eq!(remote.calls().fetch_user, 1);
}
