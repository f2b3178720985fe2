//! Argument coercion: one string token into one typed parameter value.
//!
//! A failure here is not an error the user sees. The dispatcher treats any
//! [`CoercionFailure`] as "this overload does not apply" and moves on, so a
//! malformed number and a disallowed choice look the same from outside.

use std::fmt;

use crate::descriptor::{ParamType, ParameterSpec, Value, ValueConstraint};
use crate::registry::CommandRegistry;

/// Why a token could not fill a parameter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionFailure {
    /// The token does not parse as the declared type.
    Malformed { expected: ParamType },
    /// The token is outside a hard value constraint.
    NotAllowed,
}

impl fmt::Display for CoercionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionFailure::Malformed { expected } => write!(f, "not a valid {expected}"),
            CoercionFailure::NotAllowed => f.write_str("not one of the allowed values"),
        }
    }
}

/// Convert `token` into a value for `spec`.
///
/// Numbers parse locale-independently (`.` is the only decimal separator).
/// Booleans accept `true`/`false` in any case. Strings always parse; a hard
/// constraint then rejects tokens outside its set, compared upper-cased,
/// while a soft constraint lets them through.
pub fn coerce(
    token: &str,
    spec: &ParameterSpec,
    registry: &CommandRegistry,
) -> std::result::Result<Value, CoercionFailure> {
    let malformed = || CoercionFailure::Malformed { expected: spec.ty };
    match spec.ty {
        ParamType::Int => token.parse::<i32>().map(Value::Int).map_err(|_| malformed()),
        ParamType::Float => token
            .parse::<f32>()
            .map(Value::Float)
            .map_err(|_| malformed()),
        ParamType::Bool => {
            if token.eq_ignore_ascii_case("true") {
                Ok(Value::Bool(true))
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Value::Bool(false))
            } else {
                Err(malformed())
            }
        },
        ParamType::String => {
            check_constraint(token, &spec.constraint, registry)?;
            Ok(Value::Str(token.to_string()))
        },
    }
}

fn check_constraint(
    token: &str,
    constraint: &ValueConstraint,
    registry: &CommandRegistry,
) -> std::result::Result<(), CoercionFailure> {
    let (allowed, hard) = match constraint {
        ValueConstraint::None => return Ok(()),
        ValueConstraint::Fixed { choices, hard } => (choices.clone(), *hard),
        ValueConstraint::Dynamic { set, hard } => (registry.choices(*set), *hard),
    };
    if !hard {
        return Ok(());
    }
    let wanted = token.to_uppercase();
    if allowed.iter().any(|choice| choice.to_uppercase() == wanted) {
        Ok(())
    } else {
        Err(CoercionFailure::NotAllowed)
    }
}
