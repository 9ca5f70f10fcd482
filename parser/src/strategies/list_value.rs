//! List-value convention: one delimited token carries all values.
//!
//! Flag recognition works as in the standard convention; an arity ≥ 1 option
//! then consumes exactly one following token, split on the configured
//! delimiter. For non-multi-valued options the part count must equal the
//! declared arity — a mismatch is an unexpected-option error once any value
//! token was present, while a missing value token is a missing-value error.

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
    let Some(option) = resolver::resolve_name(command, token) else {
        return Ok(Step::NotAnOption);
    };
    let option = option.clone();
    state.advance();

    if option.arity == 0 {
        debug!(option = option.canonical_name(), "bound flag");
        state.bind_option(&option, Vec::new());
        return Ok(Step::Consumed);
    }

    let Some(raw) = state.advance() else {
        return Err(ParseError::MissingValue {
            option: option.canonical_name().to_string(),
            expected: option.arity,
            found: 0,
        });
    };

    let parts: Vec<String> = raw.split(separator).map(str::to_string).collect();
    if !option.multi_valued && parts.len() != option.arity {
        return Err(ParseError::UnexpectedOption {
            option: option.canonical_name().to_string(),
            reason: format!(
                "expected {} delimited value(s) but found {}",
                option.arity,
                parts.len()
            ),
        });
    }

    debug!(
        option = option.canonical_name(),
        parts = parts.len(),
        "bound delimited option values"
    );
    state.bind_option(&option, parts);
    Ok(Step::Consumed)
}
