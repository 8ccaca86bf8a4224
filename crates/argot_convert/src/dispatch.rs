//! The recursive conversion entry point.
//!
//! [`run_converters`] looks at the shape of a plan. Unions and literals are
//! resolved here, member by member in declaration order; leaves go to the
//! [invoker](crate::invoker).

use futures::future::BoxFuture;
use tracing::{debug, trace};

use argot_foundation::{Error, Result, Type, Value};

use crate::annotation::Plan;
use crate::context::Context;
use crate::invoker;
use crate::parameter::Parameter;

/// Converts `argument` according to `plan`.
///
/// A union tries each member in order and returns the first success. When
/// it reaches the absent marker (on a non-variadic parameter) it hands the
/// token back to the cursor and returns the parameter's default. A literal
/// set converts the token at most once per literal type.
///
/// # Errors
///
/// Returns the leaf's failure, or an aggregate union or literal failure
/// listing every attempt in declaration order.
pub fn run_converters<'a>(
    ctx: &'a mut Context,
    plan: &'a Plan,
    argument: &'a str,
    param: &'a Parameter,
) -> BoxFuture<'a, Result<Value>> {
    Box::pin(async move {
        match plan {
            Plan::Union(arms) => {
                let mut errors = Vec::new();
                for arm in arms {
                    if matches!(arm, Plan::Absent) && !param.is_variadic() {
                        debug!(parameter = param.name(), argument, "union fell through to absent");
                        ctx.view_mut().undo();
                        return Ok(param.default_or_none());
                    }
                    match run_converters(ctx, arm, argument, param).await {
                        Ok(value) => return Ok(value),
                        Err(err) => {
                            debug!(parameter = param.name(), arm = %arm.label(), %err, "union member failed");
                            errors.push(err);
                        }
                    }
                }
                let labels = arms.iter().map(Plan::label).collect();
                Err(Error::bad_union(param.name(), labels, errors))
            }
            Plan::Literal(literals) => {
                match_literal(param, literals, |ty| invoker::construct(ty, argument, param))
            }
            Plan::Greedy(element) => run_converters(ctx, element, argument, param).await,
            leaf => invoker::actual_conversion(ctx, leaf, argument, param).await,
        }
    })
}

/// Matches a token against literals, converting at most once per type.
///
/// A failed conversion is remembered too, so its error is recorded once.
pub(crate) fn match_literal(
    param: &Parameter,
    literals: &[Value],
    mut convert: impl FnMut(Type) -> Result<Value>,
) -> Result<Value> {
    let mut conversions: Vec<(Type, Option<Value>)> = Vec::new();
    let mut errors = Vec::new();

    for literal in literals {
        let ty = literal.value_type();
        let converted = if let Some((_, memo)) = conversions.iter().find(|(t, _)| *t == ty) {
            memo.clone()
        } else {
            trace!(parameter = param.name(), literal_type = %ty, "converting for literal match");
            let converted = match convert(ty) {
                Ok(value) => Some(value),
                Err(err) => {
                    errors.push(err);
                    None
                }
            };
            conversions.push((ty, converted.clone()));
            converted
        };
        if converted.as_ref() == Some(literal) {
            return Ok(literal.clone());
        }
    }

    Err(Error::bad_literal(param.name(), literals.to_vec(), errors))
}
