//! Integration tests for Layer 3: Convert
//!
//! Tests for annotations, dispatch, argument reading, and the built-in
//! entity converters working against a session.

mod arguments;
mod entities;
mod fixtures;
