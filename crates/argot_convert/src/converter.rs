//! The converter protocol.
//!
//! A [`Converter`] turns one token into one [`Value`]. How a converter is
//! attached to a parameter is described by a [`ConverterSpec`]:
//!
//! - **Declarative**: a converter type, instantiated fresh for every call
//! - **Instance**: a configured converter shared across calls
//! - **Plain**: a constructor closure with no access to the context

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use argot_foundation::{BoxError, Error, Value};
use argot_session::RemoteError;

use crate::context::Context;

/// Failure reported by a [`Converter`].
#[derive(Debug, Error)]
pub enum ConverterError {
    /// A structured conversion failure. Propagates unchanged.
    #[error(transparent)]
    Command(#[from] Error),

    /// Anything else. Wrapped into a conversion error naming the converter.
    #[error(transparent)]
    Unexpected(BoxError),
}

impl ConverterError {
    /// Wraps an arbitrary error.
    pub fn unexpected(error: impl Into<BoxError>) -> Self {
        Self::Unexpected(error.into())
    }
}

impl From<RemoteError> for ConverterError {
    fn from(error: RemoteError) -> Self {
        Self::Unexpected(Box::new(error))
    }
}

/// Result type for converters.
pub type ConverterResult = std::result::Result<Value, ConverterError>;

/// Converts a raw token into a typed value.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Name used when reporting failures.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Converts `argument` in the given invocation context.
    async fn convert(&self, ctx: &Context, argument: &str) -> ConverterResult;
}

/// Constructor signature for plain converters.
pub type PlainFn = Arc<dyn Fn(&str) -> Result<Value, BoxError> + Send + Sync>;

/// How a converter is attached to a parameter.
#[derive(Clone)]
pub enum ConverterSpec {
    /// A converter type, instantiated per call.
    Declarative {
        /// Converter name.
        name: &'static str,
        /// Creates a fresh converter.
        factory: fn() -> Box<dyn Converter>,
    },
    /// A configured converter instance.
    Instance(Arc<dyn Converter>),
    /// A constructor closure.
    Plain {
        /// Name of the constructed type, used in failure messages.
        type_name: String,
        /// The constructor.
        construct: PlainFn,
    },
}

fn instantiate<C: Converter + Default + 'static>() -> Box<dyn Converter> {
    Box::new(C::default())
}

impl ConverterSpec {
    /// A converter type that is instantiated for every call.
    #[must_use]
    pub fn declarative<C: Converter + Default + 'static>() -> Self {
        let full = std::any::type_name::<C>();
        Self::Declarative {
            name: full.rsplit("::").next().unwrap_or(full),
            factory: instantiate::<C>,
        }
    }

    /// A configured converter instance.
    #[must_use]
    pub fn instance(converter: impl Converter + 'static) -> Self {
        Self::Instance(Arc::new(converter))
    }

    /// A constructor closure. Failures other than a structured [`Error`]
    /// are reported as a failed construction of `type_name`.
    #[must_use]
    pub fn plain<F>(type_name: impl Into<String>, construct: F) -> Self
    where
        F: Fn(&str) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self::Plain {
            type_name: type_name.into(),
            construct: Arc::new(construct),
        }
    }

    /// Name used when reporting failures.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Declarative { name, .. } => name,
            Self::Instance(converter) => converter.name(),
            Self::Plain { type_name, .. } => type_name,
        }
    }
}

impl fmt::Debug for ConverterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declarative { name, .. } => f.debug_tuple("Declarative").field(name).finish(),
            Self::Instance(converter) => f.debug_tuple("Instance").field(&converter.name()).finish(),
            Self::Plain { type_name, .. } => f.debug_tuple("Plain").field(type_name).finish(),
        }
    }
}
