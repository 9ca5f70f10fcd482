//! Tokenizing engine with pluggable conventions for CLI option parsing.
//!
//! Given immutable [`CommandMetadata`] and a raw token sequence, the engine
//! produces a validated [`ParseResult`] or fails fast with a precise
//! [`ParseError`]. Five tokenization conventions coexist behind the closed
//! [`Convention`] enum:
//!
//! - **Standard** — exact name tokens, values as separate tokens.
//! - **Classic getopt** — bundled single-character short options (`-abfoo`).
//! - **Long getopt** — GNU `--name=value` inline values.
//! - **Key-value** — `name<sep>value` with a configurable separator.
//! - **List-value** — a single delimited token carrying all values.
//!
//! A parse is one synchronous pass over the tokens: the engine repeatedly
//! asks the configured convention to consume the next token(s), routes
//! declined tokens to positional-argument handling, then runs required
//! checks and each value's restriction chain before assembling the result.
//! Every token is consumed exactly once — into an option occurrence, a
//! positional argument, or an error.
//!
//! A configured [`Parser`] is stateless and freely shared across threads;
//! all per-call mutable state lives in an internal parse state owned by one
//! invocation.
//!
//! # Example
//!
//! ```
//! use optline_core::{ArgumentsMetadata, CommandMetadata, OptionMetadata};
//! use optline_parser::{Convention, Parser};
//!
//! let command = CommandMetadata::new("example")
//!     .with_option(OptionMetadata::flag(["-a", "--alpha"]))
//!     .with_option(OptionMetadata::with_arity(["-b", "--beta"], 1))
//!     .with_arguments(ArgumentsMetadata::new(["input"]).multi_valued());
//!
//! let parser = Parser::new(Convention::ClassicGetOpt);
//! let result = parser.parse(&command, ["-abfoo", "input.txt"]).unwrap();
//!
//! assert!(result.has_option("--alpha"));
//! assert_eq!(result.option_value("--beta"), Some("foo"));
//! assert_eq!(result.arguments(), ["input.txt"]);
//! ```

mod error;
mod resolver;
mod result;
mod state;
mod strategies;

use optline_core::CommandMetadata;
use tracing::debug;

use crate::state::ParseState;
use crate::strategies::Step;

pub use crate::error::ParseError;
pub use crate::result::{BoundOption, ParseResult};
pub use crate::strategies::Convention;

/// Default arguments-separator token.
pub const ARGUMENTS_SEPARATOR: &str = "--";

/// Engine configuration: one convention plus separator policy.
///
/// # Examples
///
/// ```
/// use optline_parser::{Convention, ParserConfig};
///
/// let config = ParserConfig::new(Convention::Standard);
/// assert_eq!(config.arguments_separator.as_deref(), Some("--"));
///
/// // Disable the separator so "--" parses like any other token.
/// let config = config.without_arguments_separator();
/// assert!(config.arguments_separator.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// The tokenization convention in force.
    pub convention: Convention,
    /// Token after which everything remaining is positional, if enabled.
    pub arguments_separator: Option<String>,
}

impl ParserConfig {
    /// Creates a config for the given convention with the `--` separator
    /// enabled.
    pub fn new(convention: Convention) -> Self {
        Self {
            convention,
            arguments_separator: Some(ARGUMENTS_SEPARATOR.to_string()),
        }
    }

    /// Replaces the arguments-separator token.
    pub fn with_arguments_separator(mut self, separator: &str) -> Self {
        self.arguments_separator = Some(separator.to_string());
        self
    }

    /// Disables arguments-separator handling entirely.
    pub fn without_arguments_separator(mut self) -> Self {
        self.arguments_separator = None;
        self
    }
}

/// The parsing engine.
///
/// Construction is cheap; a `Parser` holds only configuration and may be
/// reused for any number of concurrent parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser for the given convention with default policy.
    pub fn new(convention: Convention) -> Self {
        Self::with_config(ParserConfig::new(convention))
    }

    /// Creates a parser from a full configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses a raw token sequence against the command's metadata.
    ///
    /// The token sequence is the process argument vector with the program
    /// and command names already stripped by the caller.
    ///
    /// # Errors
    ///
    /// Fails fast with the first [`ParseError`] encountered: missing
    /// values and grammar violations during tokenization, then missing
    /// required options/arguments, then restriction violations.
    pub fn parse<I, S>(
        &self,
        command: &CommandMetadata,
        tokens: I,
    ) -> Result<ParseResult, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        debug!(
            command = %command.name,
            convention = self.config.convention.name(),
            tokens = tokens.len(),
            "parsing"
        );
        let mut state = ParseState::new(tokens);

        while state.has_more() || state.in_group() {
            if !state.in_group()
                && let Some(separator) = &self.config.arguments_separator
                && state.peek() == Some(separator.as_str())
            {
                state.advance();
                debug!("arguments separator seen, draining remaining tokens");
                for token in state.remaining_as_arguments() {
                    bind_argument(command, &mut state, token)?;
                }
                break;
            }

            match self.config.convention.step(command, &mut state)? {
                Step::Consumed => {}
                Step::NotAnOption => {
                    if let Some(token) = state.advance() {
                        bind_argument(command, &mut state, token)?;
                    }
                }
            }
        }

        check_required(command, &state)?;
        apply_restrictions(command, &state)?;

        let (options, arguments) = state.into_parts();
        Ok(ParseResult::new(options, arguments))
    }
}

/// Routes a non-option token to the positional accumulator, enforcing the
/// command's positional capacity.
fn bind_argument(
    command: &CommandMetadata,
    state: &mut ParseState,
    token: String,
) -> Result<(), ParseError> {
    let Some(arguments) = &command.arguments else {
        return Err(ParseError::UnexpectedArgument { token });
    };
    if let Some(capacity) = arguments.capacity()
        && state.arguments().len() >= capacity
    {
        return Err(ParseError::UnexpectedArgument { token });
    }
    debug!(token = %token, "bound positional argument");
    state.bind_argument(token);
    Ok(())
}

fn check_required(command: &CommandMetadata, state: &ParseState) -> Result<(), ParseError> {
    for option in &command.options {
        if option.required && !state.is_bound(option) {
            return Err(ParseError::MissingRequiredOption {
                option: option.canonical_name().to_string(),
            });
        }
    }
    if let Some(arguments) = &command.arguments
        && arguments.required
        && state.arguments().is_empty()
    {
        return Err(ParseError::MissingRequiredArguments {
            title: arguments.title().to_string(),
        });
    }
    Ok(())
}

/// Runs every attached restriction over every bound value, declaration
/// order, first violation wins.
fn apply_restrictions(command: &CommandMetadata, state: &ParseState) -> Result<(), ParseError> {
    for bound in state.bound_options() {
        for value in &bound.values {
            for restriction in &bound.option.restrictions {
                restriction.check_option(&bound.option, value)?;
            }
        }
    }
    if let Some(arguments) = &command.arguments {
        for value in state.arguments() {
            for restriction in &arguments.restrictions {
                restriction.check_arguments(arguments, value)?;
            }
        }
    }
    Ok(())
}
