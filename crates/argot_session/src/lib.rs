//! Entity cache, guild scopes, and remote lookup primitives for Argot.
//!
//! This crate provides:
//! - [`Cache`] - Immutable entity cache with structural sharing
//! - [`Guild`] - Scope container for members, roles, channels, and more
//! - [`Remote`] - Async lookups for cache misses
//! - [`Session`] - Owner of the cache, the remote, and the retention policy
//! - [`MemoryRemote`] - An in-process [`Remote`] for tests and demos

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod config;
pub mod guild;
pub mod memory;
pub mod remote;
pub mod session;

pub use cache::Cache;
pub use config::{MemberCacheFlags, SessionConfig};
pub use guild::{ChannelRef, Guild};
pub use memory::{MemoryRemote, RemoteCalls, invite_code};
pub use remote::{MemberQuery, Remote, RemoteError, RemoteResult};
pub use session::Session;
