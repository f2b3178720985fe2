//! Overload resolution and invocation.
//!
//! The dispatcher keeps no state between calls. Each line is matched
//! against every candidate descriptor in registration order, and the first
//! one whose arity and argument coercions all succeed is invoked.

use nes_types::error::{ConsoleError, Result};

use crate::coerce::{CoercionFailure, coerce};
use crate::descriptor::{CommandDescriptor, Value};
use crate::interpreter::Environment;
use crate::registry::CommandRegistry;
use crate::tokenizer::tokenize;

impl CommandRegistry {
    /// Parse and execute a command line.
    ///
    /// Command names match case-insensitively by prefix (see
    /// [`CommandRegistry::find_candidates`]). Argument values keep the casing
    /// they were typed with. Errors raised by the command body are returned
    /// unchanged.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> Result<Option<Value>> {
        let trimmed = line.trim();
        let normalized = trimmed.to_uppercase();
        let command_name = normalized.split(' ').next().unwrap_or_default();

        let candidates = self.find_candidates(&normalized);
        if candidates.is_empty() {
            return Err(ConsoleError::CommandNotFound(command_name.to_string()));
        }

        let tokens = tokenize(trimmed);
        for descriptor in candidates {
            let Some(args) = self.bind(descriptor, &tokens) else {
                continue;
            };
            log::debug!("Executing {}", descriptor.usage());
            return descriptor.invoke(&args, env);
        }

        Err(ConsoleError::NoMatchingOverload(command_name.to_string()))
    }

    /// Coerce `tokens[1..]` against the descriptor's parameters, stopping at
    /// the first failure.
    fn bind(&self, descriptor: &CommandDescriptor, tokens: &[String]) -> Option<Vec<Value>> {
        let params = descriptor.params();
        if tokens.len().saturating_sub(1) != params.len() {
            return None;
        }

        let bound: std::result::Result<Vec<Value>, (usize, CoercionFailure)> = tokens[1..]
            .iter()
            .zip(params)
            .enumerate()
            .map(|(i, (token, spec))| coerce(token, spec, self).map_err(|f| (i, f)))
            .collect();

        match bound {
            Ok(args) => Some(args),
            Err((i, failure)) => {
                log::debug!(
                    "{} rejected: {:?} for <{}> is {failure}",
                    descriptor.usage(),
                    tokens[i + 1],
                    params[i].name
                );
                None
            },
        }
    }
}
