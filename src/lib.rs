//! Argot - Type-directed argument conversion for chat commands
//!
//! This crate re-exports all layers of the Argot system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: argot_convert    — Annotations, dispatch, greedy, built-in converters
//! Layer 2: argot_parser     — StringView cursor, quoting rules, tokenizer
//! Layer 1: argot_session    — Entity cache, remote lookups, member cache policy
//! Layer 0: argot_foundation — Core types (Snowflake, Value, Type, Colour, Error)
//! ```

pub use argot_convert as convert;
pub use argot_foundation as foundation;
pub use argot_parser as parser;
pub use argot_session as session;
