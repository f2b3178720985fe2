//! Command declarations: parameter specs, value constraints, descriptors.
//!
//! A command is declared as a [`CommandDescriptor`]: a case-insensitive name,
//! an ordered list of [`ParameterSpec`]s, a return kind, an optional summary
//! shown by `help`, and the handler that runs it. Several descriptors may
//! share a name; they are overloads and are tried in registration order.

use std::fmt;

use nes_types::error::{ConsoleError, Result};

use crate::interpreter::Environment;

/// Semantic type of a command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Int,
    Float,
    Bool,
    String,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamType::Int => "Int",
            ParamType::Float => "Float",
            ParamType::Bool => "Bool",
            ParamType::String => "String",
        };
        f.write_str(name)
    }
}

/// What a command hands back on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    Void,
    Value(ParamType),
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnKind::Void => f.write_str("Void"),
            ReturnKind::Value(ty) => write!(f, "{ty}"),
        }
    }
}

/// A coerced argument or a command result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> ParamType {
        match self {
            Value::Int(_) => ParamType::Int,
            Value::Float(_) => ParamType::Float,
            Value::Bool(_) => ParamType::Bool,
            Value::Str(_) => ParamType::String,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Str(v) => f.write_str(v),
        }
    }
}

/// Choice sets computed when an argument is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicChoices {
    /// Every registered command name.
    Commands,
    /// Every named color.
    Colors,
}

/// Restriction on the values a String parameter accepts.
///
/// `hard` decides what a value outside the set does: with `hard` the
/// overload is rejected, without it the value is accepted anyway and the set
/// only documents the expected values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValueConstraint {
    #[default]
    None,
    Fixed { choices: Vec<String>, hard: bool },
    Dynamic { set: DynamicChoices, hard: bool },
}

impl ValueConstraint {
    /// Whether a value outside the set rejects the overload.
    pub fn is_hard(&self) -> bool {
        match self {
            ValueConstraint::None => false,
            ValueConstraint::Fixed { hard, .. } | ValueConstraint::Dynamic { hard, .. } => *hard,
        }
    }
}

/// One declared parameter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: String,
    pub ty: ParamType,
    pub constraint: ValueConstraint,
}

impl ParameterSpec {
    pub fn new(name: &str, ty: ParamType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            constraint: ValueConstraint::None,
        }
    }

    pub fn int(name: &str) -> Self {
        Self::new(name, ParamType::Int)
    }

    pub fn float(name: &str) -> Self {
        Self::new(name, ParamType::Float)
    }

    pub fn bool(name: &str) -> Self {
        Self::new(name, ParamType::Bool)
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, ParamType::String)
    }

    /// Restrict the value to a fixed set of (case-insensitive) strings.
    pub fn one_of(mut self, choices: &[&str], hard: bool) -> Self {
        self.constraint = ValueConstraint::Fixed {
            choices: choices.iter().map(|c| c.to_string()).collect(),
            hard,
        };
        self
    }

    /// Restrict the value to a set computed at coercion time.
    pub fn choices(mut self, set: DynamicChoices, hard: bool) -> Self {
        self.constraint = ValueConstraint::Dynamic { set, hard };
        self
    }
}

/// Signature every command handler implements.
pub type CommandFn = dyn Fn(&[Value], &mut Environment<'_>) -> Result<Option<Value>>;

/// A named, invocable command signature.
pub struct CommandDescriptor {
    name: String,
    params: Vec<ParameterSpec>,
    returns: ReturnKind,
    summary: Option<String>,
    handler: Box<CommandFn>,
}

impl CommandDescriptor {
    pub fn new<F>(name: &str, handler: F) -> Self
    where
        F: Fn(&[Value], &mut Environment<'_>) -> Result<Option<Value>> + 'static,
    {
        Self {
            name: name.to_string(),
            params: Vec::new(),
            returns: ReturnKind::Void,
            summary: None,
            handler: Box::new(handler),
        }
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn param(mut self, spec: ParameterSpec) -> Self {
        self.params.push(spec);
        self
    }

    pub fn returns(mut self, ty: ParamType) -> Self {
        self.returns = ReturnKind::Value(ty);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParameterSpec] {
        &self.params
    }

    pub fn return_kind(&self) -> ReturnKind {
        self.returns
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// `name <param (Type)> ...`
    pub fn usage(&self) -> String {
        let mut out = self.name.clone();
        for p in &self.params {
            out.push_str(&format!(" <{} ({})>", p.name, p.ty));
        }
        out
    }

    /// Whether this overload binds every line `later` could bind, so that
    /// `later` is never selected when registered after it.
    ///
    /// A hard constraint here lets some values fall through to `later`.
    pub(crate) fn shadows(&self, later: &CommandDescriptor) -> bool {
        self.name.eq_ignore_ascii_case(&later.name)
            && self.params.len() == later.params.len()
            && self
                .params
                .iter()
                .zip(&later.params)
                .all(|(a, b)| a.ty == b.ty && !a.constraint.is_hard())
    }

    /// Check the declaration for parameters the coercer cannot handle.
    pub(crate) fn validate(&self) -> Result<()> {
        for p in &self.params {
            if p.ty != ParamType::String && p.constraint != ValueConstraint::None {
                return Err(ConsoleError::UnsupportedParameterType {
                    command: self.name.clone(),
                    parameter: p.name.clone(),
                    reason: format!("{} does not accept value constraints", p.ty),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn invoke(&self, args: &[Value], env: &mut Environment<'_>) -> Result<Option<Value>> {
        (self.handler)(args, env)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("returns", &self.returns)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

// -- Argument accessors for handlers --

fn arg<'v>(args: &'v [Value], index: usize) -> Result<&'v Value> {
    args.get(index)
        .ok_or_else(|| ConsoleError::Command(format!("missing argument {}", index + 1)))
}

fn mismatch(index: usize, expected: ParamType, got: &Value) -> ConsoleError {
    ConsoleError::Command(format!(
        "argument {} should be {expected}, got {}",
        index + 1,
        got.kind()
    ))
}

pub fn int_arg(args: &[Value], index: usize) -> Result<i32> {
    let v = arg(args, index)?;
    v.as_int().ok_or_else(|| mismatch(index, ParamType::Int, v))
}

pub fn float_arg(args: &[Value], index: usize) -> Result<f32> {
    let v = arg(args, index)?;
    v.as_float()
        .ok_or_else(|| mismatch(index, ParamType::Float, v))
}

pub fn bool_arg(args: &[Value], index: usize) -> Result<bool> {
    let v = arg(args, index)?;
    v.as_bool().ok_or_else(|| mismatch(index, ParamType::Bool, v))
}

pub fn str_arg(args: &[Value], index: usize) -> Result<&str> {
    let v = arg(args, index)?;
    v.as_str()
        .ok_or_else(|| mismatch(index, ParamType::String, v))
}
