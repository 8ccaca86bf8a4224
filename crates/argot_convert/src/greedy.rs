//! Greedy repetition.
//!
//! A `Greedy[T]` parameter converts tokens one at a time until a token
//! fails, then hands that token back to the cursor for the next parameter.

use tracing::debug;

use argot_foundation::{Error, Result, Value};

use crate::annotation::Plan;
use crate::context::Context;
use crate::dispatch::run_converters;
use crate::parameter::Parameter;

/// Converts successive tokens with `element` until one fails.
///
/// The cursor ends up just before the first token that failed to read or
/// convert. If nothing was collected:
///
/// - a variadic parameter yields an empty list
/// - a parameter with a default yields the default
/// - otherwise the failure propagates, or
///   [`MissingRequiredArgument`](argot_foundation::ErrorKind::MissingRequiredArgument)
///   if there was no token at all
///
/// # Errors
///
/// Returns the first failure when no element was collected for a required
/// parameter.
pub async fn convert_greedy(ctx: &mut Context, element: &Plan, param: &Parameter) -> Result<Value> {
    let mut collected = Vec::new();
    let mut failure = None;

    loop {
        let previous = ctx.view().index();
        ctx.view_mut().skip_ws();
        let argument = match ctx.view_mut().get_quoted_word() {
            Ok(Some(argument)) => argument,
            Ok(None) => break,
            Err(err) => {
                ctx.view_mut().seek(previous);
                failure = Some(err);
                break;
            }
        };
        match run_converters(ctx, element, &argument, param).await {
            Ok(value) => collected.push(value),
            Err(err) => {
                debug!(parameter = param.name(), argument = argument.as_str(), %err, "greedy stopped");
                ctx.view_mut().seek(previous);
                failure = Some(err);
                break;
            }
        }
    }

    if !collected.is_empty() || param.is_variadic() {
        return Ok(Value::List(collected));
    }
    if let Some(default) = param.default() {
        return Ok(default.clone());
    }
    Err(failure.unwrap_or_else(|| Error::missing_argument(param.name())))
}
