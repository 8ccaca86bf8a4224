//! Conversion configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs for the entity converters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvertConfig {
    /// Result limit for member name queries sent on a cache miss.
    pub member_query_limit: usize,
    /// Strip one leading `@` before looking a user up by name.
    pub strip_user_at: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            member_query_limit: 100,
            strip_user_at: true,
        }
    }
}

impl ConvertConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the member name query limit. Zero is treated as one.
    #[must_use]
    pub fn with_member_query_limit(mut self, limit: usize) -> Self {
        self.member_query_limit = limit.max(1);
        self
    }

    /// Enables or disables stripping a leading `@` from user names.
    #[must_use]
    pub fn with_strip_user_at(mut self, strip: bool) -> Self {
        self.strip_user_at = strip;
        self
    }
}
