//! Bare object and game converters.

use async_trait::async_trait;

use argot_foundation::{Error, Game, Object, Value};

use crate::context::Context;
use crate::converter::{Converter, ConverterResult};
use crate::patterns::{ANY_MENTION, id_or_mention};

/// Converts an ID or any user, role, or channel mention to an [`Object`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectConverter;

#[async_trait]
impl Converter for ObjectConverter {
    async fn convert(&self, _ctx: &Context, argument: &str) -> ConverterResult {
        let id = id_or_mention(argument, &ANY_MENTION).ok_or_else(|| Error::object_not_found(argument))?;
        Ok(Value::Object(Object { id }))
    }
}

/// Wraps the token as an activity name.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameConverter;

#[async_trait]
impl Converter for GameConverter {
    async fn convert(&self, _ctx: &Context, argument: &str) -> ConverterResult {
        Ok(Value::Game(Game {
            name: argument.to_string(),
        }))
    }
}
