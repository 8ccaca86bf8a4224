//! Rewindable cursor over a command's argument text.
//!
//! Every read records where it started, so [`StringView::undo`] puts back
//! exactly the last token read. That single step of history is all the
//! conversion engine needs: an optional parameter that declines a token
//! hands it back to the next parameter.

use argot_foundation::{Error, Result};

/// Opening and closing quote pairs recognised by [`StringView::get_quoted_word`].
pub const QUOTE_PAIRS: &[(char, char)] = &[
    ('"', '"'),
    ('\u{2018}', '\u{2019}'),
    ('\u{201A}', '\u{201B}'),
    ('\u{201C}', '\u{201D}'),
    ('\u{201E}', '\u{201F}'),
    ('\u{2E42}', '\u{2E42}'),
    ('\u{300C}', '\u{300D}'),
    ('\u{300E}', '\u{300F}'),
    ('\u{301D}', '\u{301E}'),
    ('\u{FE41}', '\u{FE42}'),
    ('\u{FE43}', '\u{FE44}'),
    ('\u{FF02}', '\u{FF02}'),
    ('\u{FF62}', '\u{FF63}'),
    ('\u{300A}', '\u{300B}'),
    ('\u{3008}', '\u{3009}'),
];

/// Closing quote for an opening quote character.
#[must_use]
pub fn closing_quote(open: char) -> Option<char> {
    QUOTE_PAIRS
        .iter()
        .find_map(|&(o, c)| (o == open).then_some(c))
}

/// Returns true for any opening or closing quote character.
#[must_use]
pub fn is_quote(c: char) -> bool {
    QUOTE_PAIRS.iter().any(|&(o, cl)| c == o || c == cl)
}

/// A cursor over argument text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringView {
    buffer: String,
    index: usize,
    previous: usize,
}

impl StringView {
    /// Creates a cursor at the start of `buffer`.
    #[must_use]
    pub fn new(buffer: impl Into<String>) -> Self {
        Self {
            buffer: buffer.into(),
            index: 0,
            previous: 0,
        }
    }

    /// The whole buffer.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset the last read started at.
    #[must_use]
    pub fn previous(&self) -> usize {
        self.previous
    }

    /// The unread remainder, without consuming it.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.buffer[self.index..]
    }

    /// The character under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Returns true once everything has been read.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.index >= self.buffer.len()
    }

    /// Rewinds to where the last read started.
    pub fn undo(&mut self) {
        self.index = self.previous;
    }

    /// Moves the cursor to `index`, clamped to the buffer and snapped back
    /// to a character boundary.
    pub fn seek(&mut self, index: usize) {
        let mut index = index.min(self.buffer.len());
        while !self.buffer.is_char_boundary(index) {
            index -= 1;
        }
        self.index = index;
    }

    fn advance(&mut self, start: usize, len: usize) {
        self.previous = start;
        self.index = start + len;
    }

    /// Skips leading whitespace. Returns true if anything was skipped.
    pub fn skip_ws(&mut self) -> bool {
        let rest = self.remaining();
        let skipped = rest.len() - rest.trim_start().len();
        self.advance(self.index, skipped);
        skipped > 0
    }

    /// Consumes `prefix` if the remainder starts with it.
    pub fn skip_string(&mut self, prefix: &str) -> bool {
        if self.remaining().starts_with(prefix) {
            self.advance(self.index, prefix.len());
            true
        } else {
            false
        }
    }

    /// Consumes and returns everything left.
    pub fn read_rest(&mut self) -> String {
        let rest = self.remaining().to_string();
        self.advance(self.index, rest.len());
        rest
    }

    /// Consumes and returns the next run of non-whitespace characters.
    pub fn get_word(&mut self) -> String {
        let rest = self.remaining();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = rest[..len].to_string();
        self.advance(self.index, len);
        word
    }

    /// Reads the next word, honouring quotes and backslash escapes.
    ///
    /// A token opening with a quote from [`QUOTE_PAIRS`] runs to its closing
    /// quote, which must be followed by whitespace or the end of input.
    /// Inside quotes only the pair's own quotes can be escaped; outside
    /// quotes any quote can be escaped and an unescaped one is an error.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns a quoting error for an unclosed quote, a stray quote in an
    /// unquoted word, or a closing quote followed by a non-space. The cursor
    /// does not move on error.
    pub fn get_quoted_word(&mut self) -> Result<Option<String>> {
        let start = self.index;
        let rest = self.remaining();
        let mut chars = rest.char_indices().peekable();
        let Some((_, first)) = chars.next() else {
            return Ok(None);
        };

        let close = closing_quote(first);
        let escapable = |c: char| match close {
            Some(cl) => c == first || c == cl,
            None => is_quote(c),
        };
        let mut word = String::new();
        if close.is_none() {
            word.push(first);
        }

        let end = loop {
            let Some((pos, ch)) = chars.next() else {
                if let Some(cl) = close {
                    return Err(Error::expected_closing_quote(cl));
                }
                break rest.len();
            };

            if ch == '\\' {
                match chars.peek() {
                    None => {
                        if let Some(cl) = close {
                            return Err(Error::expected_closing_quote(cl));
                        }
                        break rest.len();
                    }
                    Some(&(_, next)) if escapable(next) => {
                        chars.next();
                        word.push(next);
                    }
                    Some(_) => word.push(ch),
                }
                continue;
            }

            match close {
                None if is_quote(ch) => return Err(Error::unexpected_quote(ch)),
                None if ch.is_whitespace() => break pos,
                Some(cl) if ch == cl => {
                    if let Some(&(_, next)) = chars.peek() {
                        if !next.is_whitespace() {
                            return Err(Error::invalid_end_of_quoted_string(next));
                        }
                    }
                    break pos + ch.len_utf8();
                }
                _ => word.push(ch),
            }
        };

        self.advance(start, end);
        Ok(Some(word))
    }
}
