//! Runs one leaf conversion and normalizes its failures.
//!
//! Structured failures propagate unchanged, even when boxed as unexpected
//! errors. Anything else raised by a
//! converter is wrapped once into a conversion error; anything else raised
//! by a plain constructor becomes a bad argument naming the type and the
//! parameter.

use tracing::trace;

use argot_foundation::{Error, Result, Type, Value};

use crate::annotation::Plan;
use crate::context::Context;
use crate::converter::{ConverterError, ConverterResult, ConverterSpec};
use crate::parameter::Parameter;

/// Words accepted as `true`.
pub const TRUTHY: [&str; 7] = ["yes", "y", "true", "t", "1", "enable", "on"];

/// Words accepted as `false`.
pub const FALSY: [&str; 7] = ["no", "n", "false", "f", "0", "disable", "off"];

/// Converts a boolean word, ignoring case.
///
/// # Errors
///
/// Returns a bad boolean error carrying the lower-cased token.
pub fn convert_to_bool(argument: &str) -> Result<bool> {
    let lowered = argument.to_lowercase();
    if TRUTHY.contains(&lowered.as_str()) {
        Ok(true)
    } else if FALSY.contains(&lowered.as_str()) {
        Ok(false)
    } else {
        Err(Error::bad_bool(lowered))
    }
}

/// Runs a built-in constructor.
///
/// # Errors
///
/// Returns a bad argument error if the token does not parse, or if the type
/// has no constructor from a single token.
pub fn construct(ty: Type, argument: &str, param: &Parameter) -> Result<Value> {
    let failed = || Error::construction_failed(ty.name(), param.name());
    match ty {
        Type::Bool => convert_to_bool(argument).map(Value::Bool),
        Type::Int => argument.trim().parse::<i64>().map(Value::Int).map_err(|_| failed()),
        Type::Float => argument.trim().parse::<f64>().map(Value::Float).map_err(|_| failed()),
        Type::Str => Ok(Value::Str(argument.to_string())),
        _ => Err(failed()),
    }
}

fn normalize(converter: &str, result: ConverterResult) -> Result<Value> {
    result.map_err(|err| match err {
        ConverterError::Command(err) => err,
        ConverterError::Unexpected(source) => match source.downcast::<Error>() {
            Ok(structured) => *structured,
            Err(source) => Error::conversion(converter, source),
        },
    })
}

/// Runs a converter spec.
///
/// # Errors
///
/// Returns the converter's structured failure, or a wrapped one.
pub async fn invoke(ctx: &Context, spec: &ConverterSpec, argument: &str, param: &Parameter) -> Result<Value> {
    match spec {
        ConverterSpec::Declarative { name, factory } => {
            let converter = factory();
            normalize(name, converter.convert(ctx, argument).await)
        }
        ConverterSpec::Instance(converter) => {
            normalize(converter.name(), converter.convert(ctx, argument).await)
        }
        ConverterSpec::Plain { type_name, construct } => {
            construct(argument).map_err(|err| match err.downcast::<Error>() {
                Ok(structured) => *structured,
                Err(_) => Error::construction_failed(type_name, param.name()),
            })
        }
    }
}

/// Converts `argument` with a leaf plan.
///
/// # Errors
///
/// Returns the conversion failure. Composite plans are rejected; they are
/// walked by [`run_converters`](crate::dispatch::run_converters).
pub async fn actual_conversion(ctx: &Context, plan: &Plan, argument: &str, param: &Parameter) -> Result<Value> {
    trace!(parameter = param.name(), plan = %plan.label(), argument, "converting");
    match plan {
        Plan::Bool => convert_to_bool(argument).map(Value::Bool),
        Plan::Construct(ty) => construct(*ty, argument, param),
        Plan::Absent => construct(Type::Absent, argument, param),
        Plan::Convert { spec, .. } => invoke(ctx, spec, argument, param).await,
        Plan::Union(_) | Plan::Literal(_) | Plan::Greedy(_) => Err(Error::invalid_annotation(format!(
            "{} cannot be converted as a single value.",
            plan.label()
        ))),
    }
}
