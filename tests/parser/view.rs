//! Integration tests for StringView
//!
//! Tests quoting rules, escapes, and cursor history.

use argot_foundation::ErrorKind;
use argot_parser::{QUOTE_PAIRS, StringView, closing_quote, is_quote};

fn words(input: &str) -> Vec<String> {
    let mut view = StringView::new(input);
    let mut out = Vec::new();
    loop {
        view.skip_ws();
        match view.get_quoted_word().unwrap() {
            Some(word) => out.push(word),
            None => return out,
        }
    }
}

// =============================================================================
// Quoting
// =============================================================================

#[test]
fn every_quote_pair_delimits_a_word() {
    for &(open, close) in QUOTE_PAIRS {
        let input = format!("{open}two words{close} after");
        assert_eq!(words(&input), ["two words", "after"], "{open}{close}");
    }
}

#[test]
fn escapes_inside_quotes_only_cover_the_pair() {
    assert_eq!(words(r#""say \"hi\"""#), [r#"say "hi""#]);
    assert_eq!(words(r#""back\slash""#), [r"back\slash"]);
    assert_eq!(words("\u{201C}a \\\u{201D} b\u{201D}"), ["a \u{201D} b"]);
}

#[test]
fn escapes_outside_quotes_cover_any_quote() {
    assert_eq!(words(r#"it\"s"#), [r#"it"s"#]);
    assert_eq!(words("a\\\u{300C}b"), ["a\u{300C}b"]);
    assert_eq!(words(r"trailing\"), [r"trailing"]);
}

#[test]
fn quoting_errors() {
    let mut view = StringView::new("\u{300C}never closed");
    let err = view.get_quoted_word().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExpectedClosingQuote('\u{300D}')));

    let mut view = StringView::new("ab\"c");
    let err = view.get_quoted_word().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedQuote('"')));

    let mut view = StringView::new("\"abc\"d");
    let err = view.get_quoted_word().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEndOfQuotedString('d')));
    assert_eq!(view.index(), 0);
}

#[test]
fn quote_tables_agree() {
    assert_eq!(closing_quote('"'), Some('"'));
    assert_eq!(closing_quote('\u{300A}'), Some('\u{300B}'));
    assert_eq!(closing_quote('\u{300B}'), None);
    assert!(is_quote('\u{300B}'));
    assert!(!is_quote('\''));
}

// =============================================================================
// Cursor History
// =============================================================================

#[test]
fn undo_returns_the_last_word() {
    let mut view = StringView::new("one \"two three\" four");
    assert_eq!(view.get_quoted_word().unwrap().as_deref(), Some("one"));
    view.skip_ws();
    let start = view.index();
    assert_eq!(view.get_quoted_word().unwrap().as_deref(), Some("two three"));
    view.undo();
    assert_eq!(view.index(), start);
    assert_eq!(view.get_quoted_word().unwrap().as_deref(), Some("two three"));
    view.skip_ws();
    assert_eq!(view.read_rest(), "four");
    assert!(view.eof());
    assert_eq!(view.get_quoted_word().unwrap(), None);
}

#[test]
fn seek_snaps_to_char_boundaries() {
    let mut view = StringView::new("h\u{e9}llo");
    view.seek(2);
    assert_eq!(view.index(), 1);
    view.seek(100);
    assert!(view.eof());
    view.seek(0);
    assert!(view.skip_string("h\u{e9}"));
    assert!(!view.skip_string("x"));
    assert_eq!(view.get_word(), "llo");
}
