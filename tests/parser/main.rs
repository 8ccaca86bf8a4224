//! Integration tests for Layer 2: Parser
//!
//! Tests for the argument cursor and the tokenizer.

mod tokenizer;
mod view;
