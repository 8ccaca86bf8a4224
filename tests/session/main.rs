//! Integration tests for Layer 1: Session
//!
//! Tests for the entity cache, guild scopes, and remote lookups.

mod cache;
