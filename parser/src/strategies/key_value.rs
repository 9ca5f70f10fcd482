//! Key-value convention: `name<separator>value` in a single token.
//!
//! Also serves the long-getopt convention, which is this grammar with the
//! separator fixed at `=`. The inline form is the only accepted form for an
//! arity-1 option: a bare name token, a separator-less token, or a target of
//! any other arity is declined and falls through to positional handling —
//! a deliberate rejection, not a convenience fallback.

use optline_core::CommandMetadata;
use tracing::debug;

use super::Step;
use crate::ParseError;
use crate::resolver;
use crate::state::ParseState;

pub(crate) fn step(
    command: &CommandMetadata,
    state: &mut ParseState,
    separator: char,
) -> Result<Step, ParseError> {
    let Some(token) = state.peek() else {
        return Ok(Step::NotAnOption);
    };
    // The value is everything after the first separator occurrence.
    let Some((name, value)) = token.split_once(separator) else {
        return Ok(Step::NotAnOption);
    };
    let Some(option) = resolver::resolve_name(command, name) else {
        return Ok(Step::NotAnOption);
    };
    if option.arity != 1 {
        return Ok(Step::NotAnOption);
    }
    let option = option.clone();
    let value = value.to_string();
    state.advance();

    debug!(option = option.canonical_name(), "bound inline option value");
    state.bind_option(&option, vec![value]);
    Ok(Step::Consumed)
}
