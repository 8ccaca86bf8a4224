//! Integration tests for Value, Type, and Snowflake

use argot_foundation::{
    Channel, ChannelKind, Member, Object, Snowflake, Type, User, Value, split_tag,
};

const GUILD: u64 = 100_000_000_000_000_001;
const USER: u64 = 200_000_000_000_000_001;

// =============================================================================
// Snowflakes
// =============================================================================

#[test]
fn snowflake_digit_bounds() {
    assert_eq!(Snowflake::parse("100000000000000"), Some(Snowflake::new(100_000_000_000_000)));
    assert_eq!(Snowflake::parse("18446744073709551615"), Some(Snowflake::new(u64::MAX)));
    assert!(Snowflake::parse("99999999999999").is_none());
    assert!(Snowflake::parse("<@200000000000000001>").is_none());
}

#[test]
fn tags_split_on_the_fifth_character_from_the_end() {
    assert_eq!(split_tag("alice#0001"), Some(("alice", "0001")));
    assert_eq!(split_tag("we#ird#1234"), Some(("we#ird", "1234")));
    assert_eq!(split_tag("#0001"), None);
    assert_eq!(split_tag("alice0001"), None);
    assert_eq!(split_tag("al#ce"), None);
}

// =============================================================================
// Value Types
// =============================================================================

#[test]
fn primitive_value_types() {
    assert_eq!(Value::None.value_type(), Type::Absent);
    assert_eq!(Value::from(true).value_type(), Type::Bool);
    assert_eq!(Value::from(3_i64).value_type(), Type::Int);
    assert_eq!(Value::from(0.5).value_type(), Type::Float);
    assert_eq!(Value::from("s").value_type(), Type::Str);
    assert_eq!(Value::from(vec![Value::Int(1)]).value_type(), Type::List);
}

#[test]
fn channels_report_their_family() {
    let text = Channel::guild(300_000_000_000_000_001_u64, GUILD, "general", ChannelKind::News);
    let voice = Channel::guild(300_000_000_000_000_002_u64, GUILD, "lounge", ChannelKind::Voice);
    assert_eq!(Value::Channel(text).value_type(), Type::TextChannel);
    assert_eq!(Value::Channel(voice).value_type(), Type::VoiceChannel);
}

#[test]
fn entities_compare_by_id() {
    let a = Member::new(User::new(USER, "alice", "0001"), GUILD);
    let b = Member::new(User::new(USER, "alice", "0001"), GUILD).with_nick("Ally");
    assert_eq!(Value::Member(a), Value::Member(b));

    let object = Object { id: Snowflake::new(USER) };
    assert_ne!(Value::Object(object), Value::User(User::new(USER, "alice", "0001")));
}

#[test]
fn custom_values_compare_by_identity() {
    let a = Value::custom(7_u8);
    let b = a.clone();
    assert_eq!(a, b);
    assert_ne!(a, Value::custom(7_u8));
    assert_eq!(a.downcast_ref::<u8>(), Some(&7));
    assert_eq!(a.value_type(), Type::Custom);
}

#[test]
fn repr_quotes_only_strings() {
    assert_eq!(Value::from("a\"b").repr(), "\"a\\\"b\"");
    assert_eq!(Value::Int(-4).repr(), "-4");
    assert_eq!(Value::Bool(false).repr(), "false");
    assert_eq!(Value::from(vec![Value::from("x"), Value::Int(1)]).to_string(), "[\"x\", 1]");
}

#[test]
fn entity_types_are_registered_types() {
    for ty in Type::ENTITIES {
        assert!(ty.is_entity(), "{ty}");
    }
    for ty in [Type::Absent, Type::Bool, Type::Int, Type::Float, Type::Str, Type::List, Type::Custom] {
        assert!(!ty.is_entity(), "{ty}");
    }
}
