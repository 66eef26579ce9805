// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in string functions.

use rill_core::{Function, RillError};
use serde_json::Value;

fn single_string<'a>(name: &str, args: &'a [Value]) -> Result<&'a str, RillError> {
    match args {
        [Value::String(s)] => Ok(s),
        [other] => Err(RillError::function(
            name,
            format!("expects a string argument, got {other}"),
        )),
        _ => Err(RillError::function(
            name,
            format!("expects 1 argument, got {}", args.len()),
        )),
    }
}

fn expect_arity(name: &str, args: &[Value], expected: usize) -> Result<(), RillError> {
    if args.len() != expected {
        return Err(RillError::function(
            name,
            format!("expects {expected} argument, got {}", args.len()),
        ));
    }
    Ok(())
}

/// `upper(s)`: uppercases a string.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpperFunction;

impl Function for UpperFunction {
    fn validate(&self, args: &[Value]) -> Result<(), RillError> {
        expect_arity("upper", args, 1)
    }

    fn exec(&self, args: &[Value]) -> Result<Value, RillError> {
        Ok(Value::String(single_string("upper", args)?.to_uppercase()))
    }
}

/// `lower(s)`: lowercases a string.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerFunction;

impl Function for LowerFunction {
    fn validate(&self, args: &[Value]) -> Result<(), RillError> {
        expect_arity("lower", args, 1)
    }

    fn exec(&self, args: &[Value]) -> Result<Value, RillError> {
        Ok(Value::String(single_string("lower", args)?.to_lowercase()))
    }
}

/// `concat(a, b, ...)`: joins the arguments' text forms. Strings are used
/// verbatim, `null` becomes empty, everything else its JSON rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcatFunction;

impl Function for ConcatFunction {
    fn validate(&self, args: &[Value]) -> Result<(), RillError> {
        if args.is_empty() {
            return Err(RillError::function("concat", "expects at least 1 argument"));
        }
        Ok(())
    }

    fn exec(&self, args: &[Value]) -> Result<Value, RillError> {
        self.validate(args)?;
        let joined: String = args
            .iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect();
        Ok(Value::String(joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upper_and_lower() {
        assert_eq!(UpperFunction.exec(&[json!("MiXed")]).unwrap(), json!("MIXED"));
        assert_eq!(LowerFunction.exec(&[json!("MiXed")]).unwrap(), json!("mixed"));
    }

    #[test]
    fn upper_rejects_wrong_arity_and_type() {
        assert!(UpperFunction.validate(&[]).is_err());
        assert!(UpperFunction.validate(&[json!("a"), json!("b")]).is_err());
        let err = UpperFunction.exec(&[json!(5)]).unwrap_err();
        assert_eq!(err.to_string(), "function `upper`: expects a string argument, got 5");
    }

    #[test]
    fn concat_stringifies_arguments() {
        let out = ConcatFunction
            .exec(&[json!("id-"), json!(7), Value::Null, json!(true)])
            .unwrap();
        assert_eq!(out, json!("id-7true"));
        assert!(ConcatFunction.validate(&[]).is_err());
        assert!(!ConcatFunction.is_aggregate());
    }
}
