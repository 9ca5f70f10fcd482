//! Standard convention: exact name tokens with separate value tokens.

use optline_core::CommandMetadata;
use tracing::debug;

use super::Step;
use crate::ParseError;
use crate::resolver;
use crate::state::ParseState;

/// Consumes a recognized name token plus `arity` following value tokens.
///
/// Value tokens are accepted verbatim — a value that happens to look like
/// another option is still a value.
pub(crate) fn step(command: &CommandMetadata, state: &mut ParseState) -> Result<Step, ParseError> {
    let Some(token) = state.peek() else {
        return Ok(Step::NotAnOption);
    };
    let Some(option) = resolver::resolve_name(command, token) else {
        return Ok(Step::NotAnOption);
    };
    let option = option.clone();
    state.advance();

    let mut values = Vec::with_capacity(option.arity);
    for found in 0..option.arity {
        match state.advance() {
            Some(value) => values.push(value),
            None => {
                return Err(ParseError::MissingValue {
                    option: option.canonical_name().to_string(),
                    expected: option.arity,
                    found,
                });
            }
        }
    }

    debug!(option = option.canonical_name(), values = values.len(), "bound option");
    state.bind_option(&option, values);
    Ok(Step::Consumed)
}
