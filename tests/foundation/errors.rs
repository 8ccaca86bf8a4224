//! Integration tests for Error types
//!
//! Tests error construction, user-facing messages, and classification.

use argot_foundation::{EntityKind, Error, ErrorKind, Value};

// =============================================================================
// Not Found Errors
// =============================================================================

#[test]
fn not_found_names_entity_and_token() {
    for (kind, expected) in [
        (EntityKind::Member, "Member \"bob\" not found."),
        (EntityKind::Role, "Role \"bob\" not found."),
        (EntityKind::Sticker, "Sticker \"bob\" not found."),
    ] {
        let err = Error::not_found(kind, "bob");
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.not_found_entity(), Some(kind));
    }
}

#[test]
fn object_not_found_message() {
    let err = Error::object_not_found("nope");
    assert_eq!(err.to_string(), "\"nope\" does not follow a valid ID or mention format.");
    assert_eq!(err.not_found_entity(), None);
}

// =============================================================================
// Aggregate Errors
// =============================================================================

#[test]
fn union_failure_joins_names() {
    let err = Error::bad_union(
        "target",
        vec!["int".into(), "Member".into(), "Role".into()],
        vec![
            Error::construction_failed("int", "target"),
            Error::not_found(EntityKind::Member, "x"),
            Error::not_found(EntityKind::Role, "x"),
        ],
    );
    assert_eq!(err.to_string(), "Could not convert \"target\" into int, Member, or Role.");
    let ErrorKind::BadUnionArgument { errors, .. } = &err.kind else {
        panic!("expected a union failure");
    };
    assert_eq!(errors.len(), 3);
}

#[test]
fn literal_failure_quotes_strings() {
    let err = Error::bad_literal("mode", vec![Value::from("fast"), Value::Int(2)], Vec::new());
    assert_eq!(err.to_string(), "Could not convert \"mode\" into the literal \"fast\" or 2.");
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn conversion_failures_are_bad_arguments() {
    assert!(Error::bad_colour("x").is_bad_argument());
    assert!(Error::bad_invite("x").is_bad_argument());
    assert!(Error::partial_emoji("x").is_bad_argument());
    assert!(Error::construction_failed("float", "ratio").is_bad_argument());
}

#[test]
fn quoting_errors_are_not_bad_arguments() {
    assert!(!Error::expected_closing_quote('"').is_bad_argument());
    assert!(!Error::invalid_end_of_quoted_string('x').is_bad_argument());
    assert!(!Error::missing_argument("who").is_bad_argument());
}

#[test]
fn conversion_wraps_its_source() {
    let source = std::io::Error::other("socket closed");
    let err = Error::conversion("MemberConverter", Box::new(source));
    assert_eq!(err.to_string(), "converter MemberConverter failed: socket closed");
    assert!(matches!(err.kind, ErrorKind::Conversion { ref converter, .. } if converter == "MemberConverter"));
}
