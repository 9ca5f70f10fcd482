//! Parse error taxonomy.
//!
//! Every error is fatal to the parse (fail-fast, no partial result) and
//! carries the identity of the offending option, argument, or token.
//! Parsing is deterministic: the same input always reproduces the same
//! error.

use optline_core::RestrictionError;
use thiserror::Error;

/// Errors raised while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A recognized option requires more value tokens than remain, or an
    /// inline-only convention saw no value part at all.
    #[error("option '{option}' requires {expected} value(s) but only {found} were supplied")]
    MissingValue {
        /// Canonical name of the option.
        option: String,
        /// Declared arity.
        expected: usize,
        /// Value tokens actually available.
        found: usize,
    },

    /// A token matches option syntax but violates the active convention's
    /// grammar (e.g. an arity > 1 flag in a short-option token, or a
    /// delimited list with the wrong number of parts).
    #[error("option '{option}' is not valid here: {reason}")]
    UnexpectedOption {
        /// The option name as it appeared in the input.
        option: String,
        /// What the convention's grammar forbids.
        reason: String,
    },

    /// A token is not an option under the active convention and no
    /// positional capacity remains to accept it.
    #[error("unexpected argument '{token}'")]
    UnexpectedArgument {
        /// The offending token.
        token: String,
    },

    /// A bound value failed a declared restriction.
    #[error(transparent)]
    Restriction(#[from] RestrictionError),

    /// A required option never occurred.
    #[error("required option '{option}' is missing")]
    MissingRequiredOption {
        /// Canonical name of the option.
        option: String,
    },

    /// Required positional arguments were not supplied.
    #[error("required arguments '{title}' are missing")]
    MissingRequiredArguments {
        /// Title of the first positional slot.
        title: String,
    },

    /// A bound value could not be converted to the requested type.
    #[error("value '{value}' for option '{option}' is invalid: {message}")]
    InvalidValue {
        /// Canonical name of the option.
        option: String,
        /// The raw bound value.
        value: String,
        /// Conversion failure detail.
        message: String,
    },
}
