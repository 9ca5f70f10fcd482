//! Declarative value restrictions.
//!
//! A [`Restriction`] is a pure predicate over a candidate string value,
//! checked after a value has been fully bound to an option or positional
//! argument. The same restriction produces differently shaped messages
//! depending on its owner: option messages name the option, argument
//! messages name the argument title.
//!
//! Restrictions never mutate anything and are safe to re-evaluate; a value
//! that passed once passes every time.
//!
//! # Examples
//!
//! ```
//! use optline_core::{OptionMetadata, Restriction};
//!
//! let option = OptionMetadata::with_arity(["-n", "--name"], 1);
//!
//! let not_empty = Restriction::NotEmpty;
//! assert!(not_empty.check_option(&option, "alice").is_ok());
//!
//! let err = not_empty.check_option(&option, "").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "option '--name' requires a non-empty value"
//! );
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ArgumentsMetadata, OptionMetadata};

/// A restriction violation.
///
/// Carries the owner identity (option canonical name or argument title), the
/// offending value, and a rendered human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RestrictionError {
    /// Canonical name of the option, or the argument title.
    pub owner: String,
    /// The value that failed validation.
    pub value: String,
    /// Rendered message.
    pub message: String,
}

/// A declarative constraint on a parsed value.
///
/// The set is closed: each variant is a pure predicate with an owner-aware
/// violation message. Restrictions serialize with the metadata they are
/// attached to.
///
/// # Examples
///
/// ```
/// use optline_core::Restriction;
///
/// let allowed = Restriction::AllowedValues(vec!["json".into(), "yaml".into()]);
/// let pattern = Restriction::matches("^[a-z]+$").expect("valid pattern");
/// assert!(matches!(pattern, Restriction::Matches { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Restriction {
    /// Value must be non-empty.
    NotEmpty,
    /// Value must contain at least one non-whitespace character.
    NotBlank,
    /// Value must be at least this many characters long.
    MinLength(usize),
    /// Value must be at most this many characters long.
    MaxLength(usize),
    /// Value must be one of the listed values.
    AllowedValues(Vec<String>),
    /// Value must match the regular expression.
    Matches {
        /// The pattern source text.
        pattern: String,
    },
}

impl Restriction {
    /// Creates a [`Restriction::Matches`], trial-compiling the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::Restriction;
    ///
    /// assert!(Restriction::matches("^v[0-9]+$").is_ok());
    /// assert!(Restriction::matches("([unclosed").is_err());
    /// ```
    pub fn matches(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern)?;
        Ok(Self::Matches {
            pattern: pattern.to_string(),
        })
    }

    fn is_valid(&self, value: &str) -> bool {
        match self {
            Self::NotEmpty => !value.is_empty(),
            Self::NotBlank => value.chars().any(|c| !c.is_whitespace()),
            Self::MinLength(min) => value.chars().count() >= *min,
            Self::MaxLength(max) => value.chars().count() <= *max,
            Self::AllowedValues(allowed) => allowed.iter().any(|a| a == value),
            // A pattern that fails to compile here (deserialized without going
            // through `matches()`) is treated as never matching.
            Self::Matches { pattern } => Regex::new(pattern)
                .map(|re| re.is_match(value))
                .unwrap_or(false),
        }
    }

    /// Checks `value` against this restriction on behalf of an option.
    pub fn check_option(
        &self,
        option: &OptionMetadata,
        value: &str,
    ) -> Result<(), RestrictionError> {
        if self.is_valid(value) {
            return Ok(());
        }
        let owner = option.canonical_name();
        Err(RestrictionError {
            owner: owner.to_string(),
            value: value.to_string(),
            message: self.option_message(owner, value),
        })
    }

    /// Checks `value` against this restriction on behalf of positional
    /// arguments.
    pub fn check_arguments(
        &self,
        arguments: &ArgumentsMetadata,
        value: &str,
    ) -> Result<(), RestrictionError> {
        if self.is_valid(value) {
            return Ok(());
        }
        let owner = arguments.title();
        Err(RestrictionError {
            owner: owner.to_string(),
            value: value.to_string(),
            message: self.argument_message(owner, value),
        })
    }

    fn option_message(&self, owner: &str, value: &str) -> String {
        match self {
            Self::NotEmpty => format!("option '{owner}' requires a non-empty value"),
            Self::NotBlank => format!("option '{owner}' requires a non-blank value"),
            Self::MinLength(min) => format!(
                "option '{owner}' value '{value}' is shorter than the minimum length {min}"
            ),
            Self::MaxLength(max) => format!(
                "option '{owner}' value '{value}' exceeds the maximum length {max}"
            ),
            Self::AllowedValues(allowed) => format!(
                "option '{owner}' value '{value}' is not one of the allowed values [{}]",
                allowed.join(", ")
            ),
            Self::Matches { pattern } => format!(
                "option '{owner}' value '{value}' does not match the pattern '{pattern}'"
            ),
        }
    }

    fn argument_message(&self, owner: &str, value: &str) -> String {
        match self {
            Self::NotEmpty => format!("argument '{owner}' requires a non-empty value"),
            Self::NotBlank => format!("argument '{owner}' requires a non-blank value"),
            Self::MinLength(min) => format!(
                "argument '{owner}' value '{value}' is shorter than the minimum length {min}"
            ),
            Self::MaxLength(max) => format!(
                "argument '{owner}' value '{value}' exceeds the maximum length {max}"
            ),
            Self::AllowedValues(allowed) => format!(
                "argument '{owner}' value '{value}' is not one of the allowed values [{}]",
                allowed.join(", ")
            ),
            Self::Matches { pattern } => format!(
                "argument '{owner}' value '{value}' does not match the pattern '{pattern}'"
            ),
        }
    }
}
