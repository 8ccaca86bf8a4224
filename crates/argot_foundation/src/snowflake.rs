//! Snowflake identifiers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest digit run accepted as a snowflake in command input.
pub const MIN_DIGITS: usize = 15;

/// Longest digit run accepted as a snowflake in command input.
pub const MAX_DIGITS: usize = 20;

/// Platform-wide unique entity identifier.
///
/// Every resolvable entity (user, role, channel, message, emoji, guild...)
/// carries one. Display names are secondary and not unique; the snowflake is
/// the only key lookups can rely on.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Snowflake(u64);

impl Snowflake {
    /// Wraps a raw 64-bit identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw 64-bit identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parses a token that consists entirely of 15 to 20 ASCII digits.
    ///
    /// Returns `None` for anything else, including digit runs that do not
    /// fit in 64 bits.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if !is_snowflake_digits(token) {
            return None;
        }
        token.parse::<u64>().ok().map(Self)
    }
}

/// Returns true if `token` is a run of 15 to 20 ASCII digits and nothing else.
#[must_use]
pub fn is_snowflake_digits(token: &str) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&token.len()) && token.bytes().all(|b| b.is_ascii_digit())
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for Snowflake {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl fmt::Debug for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Snowflake({})", self.0)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
