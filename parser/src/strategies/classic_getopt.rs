//! Classic getopt(3) convention: bundled single-character short options.
//!
//! A token like `-abfoo` is consumed one flag character per step through the
//! parse state's group cursor. Arity-0 flags bind presence and leave the
//! remainder as further flags; an arity-1 flag takes the remainder of the
//! token as its value (or the next whole token when the remainder is empty)
//! and ends the group.
//!
//! Only arity 0/1 options are usable under this convention. An arity > 1
//! flag anywhere in a short token — first character included — is an
//! unexpected-option error, one consistent kind for one root cause.

use optline_core::{CommandMetadata, OptionMetadata};
use tracing::debug;

use super::Step;
use crate::ParseError;
use crate::resolver;
use crate::state::ParseState;

pub(crate) fn step(command: &CommandMetadata, state: &mut ParseState) -> Result<Step, ParseError> {
    if state.in_group() {
        return step_group(command, state);
    }

    let Some(token) = state.peek() else {
        return Ok(Step::NotAnOption);
    };
    if !token.starts_with('-') || token.starts_with("--") || token.len() < 2 {
        return Ok(Step::NotAnOption);
    }
    let mut chars = token.chars();
    chars.next();
    let Some(first) = chars.next() else {
        return Ok(Step::NotAnOption);
    };
    let rest = chars.as_str().to_string();

    // An unknown first character means the whole token is not an option and
    // falls through to positional handling.
    let Some(option) = resolver::resolve_short(command, first) else {
        return Ok(Step::NotAnOption);
    };
    if option.arity > 1 {
        return Err(arity_too_large(first));
    }
    let option = option.clone();
    state.advance();
    consume_flag(&option, rest, state)
}

/// Consumes the next flag character of an in-progress group.
fn step_group(command: &CommandMetadata, state: &mut ParseState) -> Result<Step, ParseError> {
    let Some((ch, rest)) = state.take_group() else {
        return Ok(Step::NotAnOption);
    };

    // Mid-group the token is already committed as options, so an unknown
    // character cannot fall through to positional handling.
    let Some(option) = resolver::resolve_short(command, ch) else {
        return Err(ParseError::UnexpectedOption {
            option: format!("-{ch}"),
            reason: "unknown option in a short-option group".to_string(),
        });
    };
    if option.arity > 1 {
        return Err(arity_too_large(ch));
    }
    let option = option.clone();
    consume_flag(&option, rest, state)
}

/// Binds one resolved short flag, given the unconsumed remainder of its token.
fn consume_flag(
    option: &OptionMetadata,
    rest: String,
    state: &mut ParseState,
) -> Result<Step, ParseError> {
    if option.arity == 0 {
        debug!(option = option.canonical_name(), "bound short flag");
        state.bind_option(option, Vec::new());
        state.begin_group(rest);
        return Ok(Step::Consumed);
    }

    // Arity 1: the remainder is the value; failing that, the next token.
    let value = if rest.is_empty() {
        match state.advance() {
            Some(value) => value,
            None => {
                return Err(ParseError::MissingValue {
                    option: option.canonical_name().to_string(),
                    expected: 1,
                    found: 0,
                });
            }
        }
    } else {
        rest
    };

    debug!(option = option.canonical_name(), "bound short option value");
    state.bind_option(option, vec![value]);
    Ok(Step::Consumed)
}

fn arity_too_large(ch: char) -> ParseError {
    ParseError::UnexpectedOption {
        option: format!("-{ch}"),
        reason: "only options of arity 0 or 1 may appear in a short-option token".to_string(),
    }
}
