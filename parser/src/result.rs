//! Parse results and bound-value access.

use std::fmt::Display;
use std::str::FromStr;

use optline_core::OptionMetadata;

use crate::ParseError;

/// One option's accumulated binding.
///
/// `values` holds the bound strings in encounter order: the single (or
/// latest) occurrence's values for a plain option, or the full accumulated
/// sequence for a multi-valued one. Arity-0 flags bind no values; their
/// presence is carried by `occurrences`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundOption {
    /// The option this binding belongs to.
    pub option: OptionMetadata,
    /// How many times the option occurred.
    pub occurrences: usize,
    /// The bound value strings.
    pub values: Vec<String>,
}

/// The validated output of a successful parse.
///
/// Holds each bound option (in first-occurrence order) and the ordered
/// positional arguments. The authoritative output is strings plus
/// multiplicity shape; [`option_value_as`](ParseResult::option_value_as)
/// offers a string-to-primitive conversion boundary on top.
///
/// # Examples
///
/// ```
/// use optline_core::{ArgumentsMetadata, CommandMetadata, OptionMetadata};
/// use optline_parser::{Convention, Parser};
///
/// let command = CommandMetadata::new("serve")
///     .with_option(OptionMetadata::flag(["-v", "--verbose"]))
///     .with_option(OptionMetadata::with_arity(["-p", "--port"], 1))
///     .with_arguments(ArgumentsMetadata::new(["root"]));
///
/// let parser = Parser::new(Convention::Standard);
/// let result = parser
///     .parse(&command, ["-v", "--port", "8080", "site"])
///     .unwrap();
///
/// assert!(result.has_option("--verbose"));
/// assert_eq!(result.option_value("--port"), Some("8080"));
/// assert_eq!(result.option_value_as::<u16>("--port").unwrap(), Some(8080));
/// assert_eq!(result.arguments(), ["site"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    options: Vec<BoundOption>,
    arguments: Vec<String>,
}

impl ParseResult {
    pub(crate) fn new(options: Vec<BoundOption>, arguments: Vec<String>) -> Self {
        Self { options, arguments }
    }

    /// Whether the named option occurred at least once.
    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    /// The binding for the named option, by any of its registered names.
    pub fn option(&self, name: &str) -> Option<&BoundOption> {
        self.options.iter().find(|b| b.option.matches(name))
    }

    /// The single (or last) bound value for the named option.
    pub fn option_value(&self, name: &str) -> Option<&str> {
        self.option(name)
            .and_then(|b| b.values.last())
            .map(String::as_str)
    }

    /// All bound values for the named option, empty if it never occurred.
    pub fn option_values(&self, name: &str) -> &[String] {
        self.option(name).map(|b| b.values.as_slice()).unwrap_or(&[])
    }

    /// Iterates bound options in first-occurrence order.
    pub fn options(&self) -> impl Iterator<Item = &BoundOption> {
        self.options.iter()
    }

    /// The bound positional arguments, in order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Converts the named option's value at the string-to-primitive boundary.
    ///
    /// Returns `Ok(None)` when the option never occurred, and
    /// [`ParseError::InvalidValue`] when the bound string does not convert.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{CommandMetadata, OptionMetadata};
    /// use optline_parser::{Convention, Parser, ParseError};
    ///
    /// let command = CommandMetadata::new("serve")
    ///     .with_option(OptionMetadata::with_arity(["--port"], 1));
    /// let parser = Parser::new(Convention::Standard);
    ///
    /// let result = parser.parse(&command, ["--port", "oops"]).unwrap();
    /// assert!(matches!(
    ///     result.option_value_as::<u16>("--port"),
    ///     Err(ParseError::InvalidValue { .. })
    /// ));
    /// ```
    pub fn option_value_as<T>(&self, name: &str) -> Result<Option<T>, ParseError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let Some(bound) = self.option(name) else {
            return Ok(None);
        };
        let Some(value) = bound.values.last() else {
            return Ok(None);
        };
        value
            .parse()
            .map(Some)
            .map_err(|err: T::Err| ParseError::InvalidValue {
                option: bound.option.canonical_name().to_string(),
                value: value.clone(),
                message: err.to_string(),
            })
    }
}
