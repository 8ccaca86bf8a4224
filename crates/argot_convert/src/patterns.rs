//! Token patterns shared by the entity converters.
//!
//! Every pattern is anchored at both ends except [`RGB`], which only has to
//! match a prefix of the token.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use argot_foundation::Snowflake;

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("token patterns are valid regexes")
}

/// A bare 15 to 20 digit ID.
pub static ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^([0-9]{15,20})$"));

/// `<@ID>` or `<@!ID>`.
pub static USER_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"^<@!?([0-9]{15,20})>$"));

/// `<@&ID>`.
pub static ROLE_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"^<@&([0-9]{15,20})>$"));

/// `<#ID>`.
pub static CHANNEL_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"^<#([0-9]{15,20})>$"));

/// Any user, role, or channel mention.
pub static ANY_MENTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^<(?:@(?:!|&)?|#)([0-9]{15,20})>$"));

/// `<:name:ID>` or `<a:name:ID>`, capturing only the ID.
pub static EMOJI_MENTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^<a?:[a-zA-Z0-9_]{1,32}:([0-9]{15,20})>$"));

/// `<:name:ID>` or `<a:name:ID>`, capturing the animated flag, name, and ID.
pub static PARTIAL_EMOJI: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^<(a?):([a-zA-Z0-9_]{1,32}):([0-9]{15,20})>$"));

/// `MESSAGE_ID` or `CHANNEL_ID-MESSAGE_ID`.
pub static MESSAGE_ID: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:(?P<channel_id>[0-9]{15,20})-)?(?P<message_id>[0-9]{15,20})$")
});

/// A message jump link.
pub static MESSAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^https?://(?:(ptb|canary|www)\.)?discord(?:app)?\.com/channels/(?P<guild_id>[0-9]{15,20}|@me)/(?P<channel_id>[0-9]{15,20})/(?P<message_id>[0-9]{15,20})/?$",
    )
});

/// `rgb(r, g, b)` with each channel `0-255` or a percentage. Matched
/// against lower-cased input.
pub static RGB: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^rgb\s*\((?P<r>[0-9]{1,3}%?)\s*,\s*(?P<g>[0-9]{1,3}%?)\s*,\s*(?P<b>[0-9]{1,3}%?)\s*\)")
});

/// Any mention inside free text, capturing the sigil and the ID.
pub static INLINE_MENTION: LazyLock<Regex> = LazyLock::new(|| compile(r"<(@[!&]?|#)([0-9]{15,20})>"));

/// The snowflake in the first capture group, if the whole token matches.
///
/// A run of digits too large for an ID counts as no match.
#[must_use]
pub fn capture_id(pattern: &Regex, argument: &str) -> Option<Snowflake> {
    pattern
        .captures(argument)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Snowflake::parse(m.as_str()))
}

/// A bare ID, or the ID inside `mention`.
#[must_use]
pub fn id_or_mention(argument: &str, mention: &Regex) -> Option<Snowflake> {
    capture_id(&ID, argument).or_else(|| capture_id(mention, argument))
}

/// A named snowflake group, if present and in range.
pub(crate) fn named_id(caps: &Captures<'_>, name: &str) -> Option<Snowflake> {
    caps.name(name).and_then(|m| Snowflake::parse(m.as_str()))
}
