//! Integration tests for reading whole argument lists
//!
//! Tests greedy repetition, optional rewinding, defaults, rest-of-input
//! parameters, and variadics.

use argot_convert::{Annotation, Parameter, convert_arguments};
use argot_foundation::{ErrorKind, Type, Value};
use proptest::prelude::*;

use crate::fixtures::{ALICE, BOB, guild_ctx};

async fn run(args: &str, params: &[Parameter]) -> argot_foundation::Result<Vec<Value>> {
    convert_arguments(&mut guild_ctx(args), params).await
}

fn ints(values: &[i64]) -> Value {
    Value::List(values.iter().copied().map(Value::Int).collect())
}

// =============================================================================
// Greedy
// =============================================================================

#[tokio::test]
async fn greedy_members_then_reason() {
    let params = [
        Parameter::new("who", Annotation::greedy(Type::Member)).unwrap(),
        Parameter::new("reason", Type::Str).unwrap().consume_rest(),
    ];
    let values = run(&format!("alice <@{BOB}>  for   spamming "), &params).await.unwrap();
    let Value::List(members) = &values[0] else {
        panic!("expected a list");
    };
    let ids: Vec<u64> = members.iter().filter_map(|m| m.as_member()).map(|m| m.id().get()).collect();
    assert_eq!(ids, [ALICE, BOB]);
    assert_eq!(values[1], Value::from("for   spamming"));
}

#[tokio::test]
async fn greedy_hands_back_a_badly_quoted_token() {
    let params = [
        Parameter::new("numbers", Annotation::greedy(Type::Int)).unwrap(),
        Parameter::new("rest", Type::Str).unwrap().consume_rest(),
    ];
    let values = run("1 2 \"oops", &params).await.unwrap();
    assert_eq!(values, [ints(&[1, 2]), Value::from("\"oops")]);
}

#[tokio::test]
async fn greedy_of_a_union() {
    let params = [
        Parameter::new("items", Annotation::greedy(Annotation::union([Type::Int.into(), Type::Bool.into()]))).unwrap(),
        Parameter::new("rest", Type::Str).unwrap(),
    ];
    let values = run("1 yes 2 no done", &params).await.unwrap();
    assert_eq!(
        values[0],
        Value::List(vec![Value::Int(1), Value::Bool(true), Value::Int(2), Value::Bool(false)])
    );
    assert_eq!(values[1], Value::from("done"));
}

// =============================================================================
// Optional Parameters
// =============================================================================

#[tokio::test]
async fn optional_declines_and_rewinds() {
    let params = [
        Parameter::new("days", Annotation::optional(Type::Int)).unwrap(),
        Parameter::new("reason", Type::Str).unwrap(),
    ];
    assert_eq!(run("spam", &params).await.unwrap(), [Value::None, Value::from("spam")]);
    assert_eq!(run("3 spam", &params).await.unwrap(), [Value::Int(3), Value::from("spam")]);
}

#[tokio::test]
async fn optional_uses_its_default() {
    let params = [
        Parameter::new("days", Annotation::optional(Type::Int)).unwrap().with_default(7_i64),
        Parameter::new("reason", Type::Str).unwrap(),
    ];
    assert_eq!(run("spam", &params).await.unwrap(), [Value::Int(7), Value::from("spam")]);
}

#[tokio::test]
async fn running_out_of_input() {
    let params = [
        Parameter::new("a", Type::Int).unwrap(),
        Parameter::new("b", Annotation::optional(Type::Int)).unwrap(),
        Parameter::new("c", Type::Int).unwrap().with_default(9_i64),
    ];
    assert_eq!(run("1", &params).await.unwrap(), [Value::Int(1), Value::None, Value::Int(9)]);

    let err = run("   ", &params).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingRequiredArgument(ref p) if p == "a"));
    assert_eq!(err.to_string(), "a is a required argument that is missing.");
}

#[tokio::test]
async fn undeclared_parameters_take_their_defaults_type() {
    let params = [Parameter::undeclared("count").with_default(5_i64)];
    assert_eq!(run("12", &params).await.unwrap(), [Value::Int(12)]);
    let err = run("many", &params).await.unwrap_err();
    assert_eq!(err.to_string(), "Converting to \"int\" failed for parameter \"count\".");

    let params = [Parameter::undeclared("word")];
    assert_eq!(run("\"hello there\"", &params).await.unwrap(), [Value::from("hello there")]);
}

// =============================================================================
// Quoting and Variadics
// =============================================================================

#[tokio::test]
async fn quoting_errors_propagate() {
    let params = [Parameter::new("text", Type::Str).unwrap()];
    let err = run("\"unclosed", &params).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExpectedClosingQuote('"')));
}

#[tokio::test]
async fn variadic_takes_one_value_per_token() {
    let params = [
        Parameter::new("op", Type::Str).unwrap(),
        Parameter::new("nums", Type::Int).unwrap().variadic(),
    ];
    let values = run("add 1 \"2\" 3", &params).await.unwrap();
    assert_eq!(values, [Value::from("add"), Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_eq!(run("add", &params).await.unwrap(), [Value::from("add")]);
    assert!(run("add 1 x", &params).await.is_err());
}

#[tokio::test]
async fn variadic_greedy_may_be_empty() {
    let params = [Parameter::new("nums", Annotation::greedy(Type::Int)).unwrap().variadic()];
    assert_eq!(run("4 5", &params).await.unwrap(), [Value::Int(4), Value::Int(5)]);
    assert!(run("", &params).await.unwrap().is_empty());
}

proptest! {
    #[test]
    fn greedy_collects_every_number(numbers in prop::collection::vec(any::<i64>(), 1..12)) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let args = numbers.iter().map(ToString::to_string).collect::<Vec<_>>().join("  ");
        let params = [Parameter::new("numbers", Annotation::greedy(Type::Int)).unwrap()];
        let values = runtime.block_on(run(&format!("{args} end"), &params)).unwrap();
        prop_assert_eq!(&values[0], &ints(&numbers));
    }
}
