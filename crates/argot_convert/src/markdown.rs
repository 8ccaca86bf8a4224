//! Markdown and mention sanitizing for cleaned message content.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::patterns::compile;

/// Markdown control characters, block quotes, and masked links, with URLs
/// matched first so they are left untouched.
static MARKDOWN: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"(?m)(?:",
        r#"(?P<url><[^: >]+:/[^ >]+>|(?:https?|steam)://[^\s<]+[^<.,:;"'\]\s])"#,
        r"|(?P<markdown>[_\\~|*`]|^>(?:>>)?\s|\[.+\]\(.+\))",
        r")",
    ))
});

static MASS_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"@(everyone|here|[!&]?[0-9]{17,20})"));

/// Prefixes every markdown control sequence with a backslash.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    MARKDOWN
        .replace_all(text, |caps: &Captures<'_>| match (caps.name("url"), caps.name("markdown")) {
            (Some(url), _) => url.as_str().to_string(),
            (None, Some(markdown)) => format!("\\{}", markdown.as_str()),
            (None, None) => String::new(),
        })
        .into_owned()
}

/// Strips every markdown control sequence.
#[must_use]
pub fn remove_markdown(text: &str) -> String {
    MARKDOWN
        .replace_all(text, |caps: &Captures<'_>| {
            caps.name("url").map_or_else(String::new, |url| url.as_str().to_string())
        })
        .into_owned()
}

/// Breaks `@everyone`, `@here`, and raw ID mentions with a zero-width space.
#[must_use]
pub fn escape_mentions(text: &str) -> String {
    MASS_MENTION.replace_all(text, "@\u{200b}$1").into_owned()
}
