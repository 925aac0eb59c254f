//! `${VAR}` interpolation for configuration values.
//!
//! Only the target URL and header values are interpolated, so secrets such
//! as API tokens can stay in the environment:
//!
//! ```yaml
//! headers:
//!   Authorization: "Bearer ${API_TOKEN}"
//! ```
//!
//! `$${NAME}` produces a literal `${NAME}`.

use crate::error::{ProbeError, Result};
use std::collections::HashMap;

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Split `input` into literal and `${variable}` segments.
///
/// An unterminated `${` is kept as a variable reference running to the end
/// of the input, which then fails to resolve.
pub fn parse_interpolation(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        literal.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(escaped) = after.strip_prefix("${") {
            // $${name} -> literal ${name}
            let end = escaped.find('}').map_or(escaped.len(), |i| i + 1);
            literal.push_str("${");
            literal.push_str(&escaped[..end]);
            rest = &escaped[end..];
        } else if let Some(body) = after.strip_prefix('{') {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            let (name, remainder) = match body.find('}') {
                Some(i) => (&body[..i], &body[i + 1..]),
                None => (body, ""),
            };
            segments.push(Segment::Variable(name.to_string()));
            rest = remainder;
        } else if let Some(stripped) = after.strip_prefix('$') {
            literal.push('$');
            rest = stripped;
        } else {
            literal.push('$');
            rest = after;
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Variables available to interpolation.
///
/// Environment variables take precedence over built-ins.
#[derive(Debug, Default)]
pub struct InterpolationContext {
    /// Environment variables
    pub env: HashMap<String, String>,

    /// Built-in variables (fieldprobe_version)
    pub builtins: HashMap<String, String>,
}

impl InterpolationContext {
    /// Create a context holding only the built-in variables.
    pub fn new() -> Self {
        let mut builtins = HashMap::new();
        builtins.insert(
            "fieldprobe_version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        );

        Self {
            builtins,
            ..Default::default()
        }
    }

    /// Create a context from the current process environment.
    pub fn from_process_env() -> Self {
        Self::new().with_env(std::env::vars().collect())
    }

    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Resolve a variable name to its value.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.env
            .get(name)
            .or_else(|| self.builtins.get(name))
            .cloned()
    }
}

/// Resolve all variables in an interpolated string.
///
/// # Errors
///
/// Returns `ConfigValidationError` if any variable is not found in the context.
pub fn resolve_string(input: &str, context: &InterpolationContext) -> Result<String> {
    parse_interpolation(input)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => Ok(text),
            Segment::Variable(name) => {
                context
                    .resolve(&name)
                    .ok_or_else(|| ProbeError::ConfigValidationError {
                        message: format!("Unresolved variable: ${{{}}}", name),
                    })
            }
        })
        .collect()
}
