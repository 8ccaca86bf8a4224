//! Core types, entity models, values, and errors for Argot.
//!
//! This crate provides:
//! - [`Snowflake`] - Platform-wide entity identifiers
//! - Entity models ([`User`], [`Member`], [`Role`], [`Channel`], ...)
//! - [`Colour`] - Packed RGB colours with named presets
//! - [`Type`] - Descriptors for the types an argument can convert into
//! - [`Value`] - The result of a conversion
//! - [`Error`] - The structured conversion failure taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod colour;
pub mod error;
pub mod model;
pub mod snowflake;
pub mod types;
pub mod value;

pub use colour::{Color, Colour};
pub use error::{BoxError, EntityKind, Error, ErrorKind};
pub use model::{
    Channel, ChannelKind, Emoji, Game, GuildInfo, Invite, Member, Message, Object, PartialEmoji,
    PartialMessage, Role, Sticker, Thread, User, split_tag,
};
pub use snowflake::Snowflake;
pub use types::Type;
pub use value::{CustomValue, Value};

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
