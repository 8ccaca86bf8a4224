//! Token cursor for Argot command input.
//!
//! The conversion engine never sees a whole command line. It asks a
//! [`StringView`] for one word at a time and, when an optional parameter
//! declines a word, hands it back with [`StringView::undo`].
//!
//! # Architecture
//!
//! ```text
//! "ban \"Alice Smith\" 7 spamming"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STRING VIEW     │  → skip_ws / get_quoted_word / undo / read_rest
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CONVERSION      │  → Member, int, str (argot_convert)
//! └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod tokenizer;
pub mod view;

pub use tokenizer::{ArgumentToken, ArgumentTokenizer};
pub use view::{QUOTE_PAIRS, StringView, closing_quote, is_quote};
