//! Whole-input tokenization.
//!
//! Splits a command's argument text into the words a [`StringView`] would
//! hand out one at a time. This is a preview helper for callers that want
//! to show or validate the tokens up front; conversion itself reads lazily
//! from the cursor and never calls it.

use argot_foundation::Result;

use crate::view::StringView;

/// A token from command input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentToken {
    /// A bare word.
    Word(String),
    /// A quoted string, quotes removed.
    Quoted(String),
}

impl ArgumentToken {
    /// The token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(s) | Self::Quoted(s) => s,
        }
    }
}

/// Tokenizes command input.
pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    /// Tokenizes a raw argument string.
    ///
    /// - Splits on whitespace
    /// - Keeps quoted strings as single tokens
    /// - Resolves backslash-escaped quotes
    ///
    /// # Errors
    ///
    /// Returns the first quoting error encountered.
    pub fn tokenize(input: &str) -> Result<Vec<ArgumentToken>> {
        let mut view = StringView::new(input);
        let mut tokens = Vec::new();
        loop {
            view.skip_ws();
            let quoted = view.current().is_some_and(|c| crate::view::closing_quote(c).is_some());
            match view.get_quoted_word()? {
                Some(word) if quoted => tokens.push(ArgumentToken::Quoted(word)),
                Some(word) => tokens.push(ArgumentToken::Word(word)),
                None => break,
            }
        }
        Ok(tokens)
    }
}
