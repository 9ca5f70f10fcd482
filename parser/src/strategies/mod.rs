//! Pluggable tokenization conventions.
//!
//! Each convention implements one shared step contract: positioned at an
//! unconsumed token, either consume it (and possibly following tokens) as an
//! option occurrence, reject it with a grammar error, or decline it so the
//! engine can route it to positional-argument handling.
//!
//! The set is closed by design — a tagged enum rather than an open trait —
//! so a configured parser names exactly one grammar and nothing can extend
//! it from outside.

mod classic_getopt;
mod key_value;
mod list_value;
mod standard;

use optline_core::CommandMetadata;

use crate::ParseError;
use crate::state::ParseState;

/// Outcome of asking a convention to consume the next token(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// One or more tokens were consumed as an option occurrence.
    Consumed,
    /// The leading token is not an option under this convention; the engine
    /// should bind it positionally.
    NotAnOption,
}

/// A tokenization convention, selected at parser configuration time.
///
/// | Convention | Flag forms | Inline value | Bundling |
/// |---|---|---|---|
/// | `Standard` | any registered name | none | none |
/// | `ClassicGetOpt` | `-x` short forms | token remainder | yes (arity 0/1) |
/// | `LongGetOpt` | any registered name | `name=value` | none |
/// | `KeyValue` | any registered name | `name<sep>value` | none |
/// | `ListValue` | any registered name | none (next token, delimited) | none |
///
/// # Examples
///
/// ```
/// use optline_parser::Convention;
///
/// let kv = Convention::KeyValue { separator: ':' };
/// let list = Convention::ListValue { separator: ',' };
/// assert_ne!(kv, list);
/// assert_eq!(Convention::default(), Convention::Standard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    /// Exact name tokens; arity values follow as separate tokens.
    #[default]
    Standard,
    /// Single-dash short options with character bundling, getopt(3) style.
    ClassicGetOpt,
    /// GNU-style `name=value` inline values (arity-1 options only).
    LongGetOpt,
    /// `name<separator>value` inline values with a configurable separator.
    KeyValue {
        /// Character separating the name from the value within one token.
        separator: char,
    },
    /// Standard flag recognition with a single delimited list-value token.
    ListValue {
        /// Character delimiting list parts within the value token.
        separator: char,
    },
}

impl Convention {
    /// Name used in diagnostics and trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::ClassicGetOpt => "classic-getopt",
            Self::LongGetOpt => "long-getopt",
            Self::KeyValue { .. } => "key-value",
            Self::ListValue { .. } => "list-value",
        }
    }

    pub(crate) fn step(
        &self,
        command: &CommandMetadata,
        state: &mut ParseState,
    ) -> Result<Step, ParseError> {
        match self {
            Self::Standard => standard::step(command, state),
            Self::ClassicGetOpt => classic_getopt::step(command, state),
            // Long getopt is the key-value grammar fixed at '='.
            Self::LongGetOpt => key_value::step(command, state, '='),
            Self::KeyValue { separator } => key_value::step(command, state, *separator),
            Self::ListValue { separator } => list_value::step(command, state, *separator),
        }
    }
}
