//! Integration tests for ArgumentTokenizer

use argot_foundation::ErrorKind;
use argot_parser::{ArgumentToken, ArgumentTokenizer};

#[test]
fn mixed_words_and_quotes() {
    let tokens = ArgumentTokenizer::tokenize("  ban \u{300C}Some One\u{300D}   7d \"\" ").unwrap();
    assert_eq!(
        tokens,
        vec![
            ArgumentToken::Word("ban".into()),
            ArgumentToken::Quoted("Some One".into()),
            ArgumentToken::Word("7d".into()),
            ArgumentToken::Quoted(String::new()),
        ]
    );
}

#[test]
fn mentions_stay_whole() {
    let tokens = ArgumentTokenizer::tokenize("<@!200000000000000001> <#300000000000000001>").unwrap();
    let texts: Vec<&str> = tokens.iter().map(ArgumentToken::as_str).collect();
    assert_eq!(texts, ["<@!200000000000000001>", "<#300000000000000001>"]);
}

#[test]
fn first_quoting_error_wins() {
    let err = ArgumentTokenizer::tokenize("a \"b\"c \"d").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEndOfQuotedString('c')));
}
