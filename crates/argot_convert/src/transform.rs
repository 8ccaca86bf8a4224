//! Reads tokens for parameters and converts them.
//!
//! This is the part of a dispatch loop that decides how much input a
//! parameter consumes and what it gets when the input runs out.

use tracing::trace;

use argot_foundation::{Error, Result, Value};

use crate::annotation::Plan;
use crate::context::Context;
use crate::dispatch::run_converters;
use crate::greedy::convert_greedy;
use crate::parameter::{Parameter, ParameterKind};

/// Reads and converts the value for one parameter.
///
/// # Errors
///
/// Returns [`MissingRequiredArgument`](argot_foundation::ErrorKind::MissingRequiredArgument)
/// when a required parameter finds no input, a quoting error from the
/// cursor, or the conversion failure.
pub async fn transform(ctx: &mut Context, param: &Parameter) -> Result<Value> {
    if let Plan::Greedy(element) = param.plan() {
        return convert_greedy(ctx, element, param).await;
    }

    ctx.view_mut().skip_ws();
    if ctx.view().eof() {
        if !param.is_required() {
            return Ok(param.default_or_none());
        }
        if param.plan().accepts_absent() {
            return Ok(Value::None);
        }
        return Err(Error::missing_argument(param.name()));
    }

    let argument = match param.kind() {
        ParameterKind::ConsumeRest => ctx.view_mut().read_rest().trim().to_string(),
        ParameterKind::Positional | ParameterKind::Variadic => {
            ctx.view_mut().get_quoted_word()?.unwrap_or_default()
        }
    };
    trace!(parameter = param.name(), argument = argument.as_str(), "read token");
    run_converters(ctx, param.plan(), &argument, param).await
}

/// Converts every parameter in declaration order.
///
/// A variadic parameter takes every remaining token and contributes one
/// value per token.
///
/// # Errors
///
/// Returns the first failure.
pub async fn convert_arguments(ctx: &mut Context, params: &[Parameter]) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(params.len());
    for param in params {
        if !param.is_variadic() {
            values.push(transform(ctx, param).await?);
            continue;
        }
        if matches!(param.plan(), Plan::Greedy(_)) {
            if let Value::List(items) = transform(ctx, param).await? {
                values.extend(items);
            }
            continue;
        }
        loop {
            ctx.view_mut().skip_ws();
            if ctx.view().eof() {
                break;
            }
            values.push(transform(ctx, param).await?);
        }
    }
    Ok(values)
}
