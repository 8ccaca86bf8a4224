//! Type-directed argument conversion for Argot commands.
//!
//! This crate provides:
//! - [`Annotation`] - Declared parameter types, compiled into a [`Plan`]
//! - [`Parameter`] - Parameter descriptors with defaults and kinds
//! - [`Converter`] - The converter protocol and [`ConverterSpec`]
//! - [`converters`] - Built-in converters for every entity type
//! - [`Registry`] - The entity type to converter mapping
//! - [`run_converters`] - The recursive conversion entry point
//! - [`transform`] - Token reading, greedy repetition, and defaults
//!
//! # Architecture
//!
//! ```text
//! Parameter::new(name, annotation)
//!          │  compile (Optional → Union, flatten, Registry lookup, Greedy checks)
//!          ▼
//! ┌─────────────────┐
//! │ TRANSFORM       │  → read token from the Context's StringView
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DISPATCH        │  → Union / Literal / Greedy, recursing per member
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ INVOKER         │  → bool, int, float, str, or a Converter
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CONVERTERS      │  → Cache snapshot, then Session remote lookups
//! └─────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod annotation;
pub mod config;
pub mod context;
pub mod converter;
pub mod converters;
pub mod dispatch;
pub mod greedy;
pub mod invoker;
pub mod markdown;
pub mod parameter;
pub mod patterns;
pub mod registry;
pub mod transform;

pub use annotation::{Annotation, Plan};
pub use config::ConvertConfig;
pub use context::Context;
pub use converter::{Converter, ConverterError, ConverterResult, ConverterSpec, PlainFn};
pub use dispatch::run_converters;
pub use greedy::convert_greedy;
pub use invoker::{FALSY, TRUTHY, convert_to_bool};
pub use parameter::{Parameter, ParameterKind};
pub use registry::Registry;
pub use transform::{convert_arguments, transform};
