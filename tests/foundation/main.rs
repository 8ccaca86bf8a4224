//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Snowflake, Value, Colour, and Error.

mod colours;
mod errors;
mod values;
