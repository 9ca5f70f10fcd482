//! Metadata type definitions for command option parsing.
//!
//! This module defines the immutable data model a parser works against: the
//! options a command accepts, the positional arguments it takes, and the
//! restrictions attached to either. The types are designed for serialization
//! with [`serde`] so metadata can be built from declarative JSON config as
//! easily as from builder calls.
//!
//! Metadata is assumed to be supplied by an external builder that has already
//! enforced structural invariants (unique option names across a command,
//! sensible arity). Nothing here re-validates that shape.

use serde::{Deserialize, Serialize};

use crate::Restriction;

/// Metadata for a single named option.
///
/// An option owns a set of recognized name strings (e.g. `-v` and
/// `--verbose` both refer to the same option), an arity (how many value
/// tokens one occurrence consumes), and multiplicity/required/hidden flags.
///
/// Use the constructors [`flag`](OptionMetadata::flag) and
/// [`with_arity`](OptionMetadata::with_arity), then chain builder methods.
///
/// # Examples
///
/// ```
/// use optline_core::OptionMetadata;
///
/// let verbose = OptionMetadata::flag(["-v", "--verbose"])
///     .with_description("Enable verbose output");
/// assert_eq!(verbose.arity, 0);
/// assert!(verbose.matches("--verbose"));
///
/// let output = OptionMetadata::with_arity(["-o", "--output"], 1).required();
/// assert_eq!(output.arity, 1);
/// assert!(output.required);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionMetadata {
    /// All recognized names for this option (e.g. `["-b", "--beta"]`).
    pub names: Vec<String>,
    /// Number of value tokens one occurrence consumes.
    pub arity: usize,
    /// Whether repeated occurrences accumulate rather than overwrite.
    #[serde(default)]
    pub multi_valued: bool,
    /// Whether the option must occur at least once.
    #[serde(default)]
    pub required: bool,
    /// Hidden options still parse; they are only omitted from help output.
    #[serde(default)]
    pub hidden: bool,
    /// Description for help rendering.
    #[serde(default)]
    pub description: Option<String>,
    /// Restrictions applied to each bound value, in declaration order.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
}

impl OptionMetadata {
    /// Creates a boolean flag (arity 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionMetadata;
    ///
    /// let flag = OptionMetadata::flag(["-a", "--alpha"]);
    /// assert_eq!(flag.arity, 0);
    /// assert!(flag.matches("-a"));
    /// ```
    pub fn flag<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_arity(names, 0)
    }

    /// Creates an option that consumes `arity` value tokens per occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionMetadata;
    ///
    /// let charlie = OptionMetadata::with_arity(["-c", "--charlie"], 2);
    /// assert_eq!(charlie.arity, 2);
    /// ```
    pub fn with_arity<I, S>(names: I, arity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            arity,
            multi_valued: false,
            required: false,
            hidden: false,
            description: None,
            restrictions: Vec::new(),
        }
    }

    /// Marks repeated occurrences as accumulating into a sequence.
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Marks the option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Hides the option from help output (it still parses normally).
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Appends a restriction to the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::{OptionMetadata, Restriction};
    ///
    /// let name = OptionMetadata::with_arity(["--name"], 1)
    ///     .with_restriction(Restriction::NotEmpty)
    ///     .with_restriction(Restriction::MaxLength(32));
    /// assert_eq!(name.restrictions.len(), 2);
    /// ```
    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    /// Checks whether `name` is one of this option's recognized names.
    pub fn matches(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the single-character short form, if one is registered.
    ///
    /// A short form is a name of exactly one dash followed by one character
    /// (e.g. `-b`), the shape eligible for classic getopt bundling.
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionMetadata;
    ///
    /// let beta = OptionMetadata::with_arity(["-b", "--beta"], 1);
    /// assert_eq!(beta.short_form(), Some('b'));
    ///
    /// let long_only = OptionMetadata::flag(["--long-only"]);
    /// assert_eq!(long_only.short_form(), None);
    /// ```
    pub fn short_form(&self) -> Option<char> {
        self.names.iter().find_map(|n| {
            let mut chars = n.chars();
            match (chars.next(), chars.next(), chars.next()) {
                (Some('-'), Some(c), None) if c != '-' => Some(c),
                _ => None,
            }
        })
    }

    /// Returns the canonical name (first `--` long form, falls back to the
    /// first registered name).
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::OptionMetadata;
    ///
    /// let beta = OptionMetadata::with_arity(["-b", "--beta"], 1);
    /// assert_eq!(beta.canonical_name(), "--beta");
    ///
    /// let short_only = OptionMetadata::flag(["-x"]);
    /// assert_eq!(short_only.canonical_name(), "-x");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.names
            .iter()
            .find(|n| n.starts_with("--"))
            .or_else(|| self.names.first())
            .map(String::as_str)
            .unwrap_or("unknown")
    }
}

/// Metadata for a command's positional arguments.
///
/// Positional arguments are bound by position rather than by flag name.
/// `titles` names each expected slot; `multi_valued` lifts the capacity to
/// unbounded so trailing values collect into a sequence.
///
/// # Examples
///
/// ```
/// use optline_core::ArgumentsMetadata;
///
/// let args = ArgumentsMetadata::new(["source", "dest"]);
/// assert_eq!(args.capacity(), Some(2));
///
/// let files = ArgumentsMetadata::new(["file"]).multi_valued();
/// assert_eq!(files.capacity(), None); // unbounded
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentsMetadata {
    /// Titles for the positional slots, in order.
    pub titles: Vec<String>,
    /// Whether at least one positional value must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Whether trailing values accumulate without bound.
    #[serde(default)]
    pub multi_valued: bool,
    /// Description for help rendering.
    #[serde(default)]
    pub description: Option<String>,
    /// Restrictions applied to each bound value, in declaration order.
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
}

impl ArgumentsMetadata {
    /// Creates positional-argument metadata with the given slot titles.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            required: false,
            multi_valued: false,
            description: None,
            restrictions: Vec::new(),
        }
    }

    /// Marks the arguments as required (at least one value).
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Lifts the positional capacity to unbounded.
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Appends a restriction to the chain.
    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restrictions.push(restriction);
        self
    }

    /// Returns the first title, the name used in diagnostics.
    pub fn title(&self) -> &str {
        self.titles.first().map(String::as_str).unwrap_or("args")
    }

    /// Maximum number of positional values accepted, `None` for unbounded.
    ///
    /// Non-multi-valued metadata with no titles still accepts one value.
    pub fn capacity(&self) -> Option<usize> {
        if self.multi_valued {
            None
        } else {
            Some(self.titles.len().max(1))
        }
    }
}

/// Complete parsing metadata for one command.
///
/// This is the read-only input to the parsing engine: the option set (unique
/// by every recognized name, enforced by the external metadata builder) and
/// optional positional-argument metadata.
///
/// # Examples
///
/// ```
/// use optline_core::{ArgumentsMetadata, CommandMetadata, OptionMetadata};
///
/// let command = CommandMetadata::new("copy")
///     .with_option(OptionMetadata::flag(["-v", "--verbose"]))
///     .with_option(OptionMetadata::with_arity(["-o", "--output"], 1))
///     .with_arguments(ArgumentsMetadata::new(["source"]).multi_valued());
///
/// assert!(command.find_option("--output").is_some());
/// assert!(command.find_short_option('v').is_some());
/// assert!(command.find_option("--missing").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// The command name (e.g. "commit").
    pub name: String,
    /// Description for help rendering.
    #[serde(default)]
    pub description: Option<String>,
    /// All options the command accepts.
    #[serde(default)]
    pub options: Vec<OptionMetadata>,
    /// Positional-argument metadata, if the command takes any.
    #[serde(default)]
    pub arguments: Option<ArgumentsMetadata>,
}

impl CommandMetadata {
    /// Creates command metadata with the given name and no options.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            options: Vec::new(),
            arguments: None,
        }
    }

    /// Adds an option.
    pub fn with_option(mut self, option: OptionMetadata) -> Self {
        self.options.push(option);
        self
    }

    /// Sets the positional-argument metadata.
    pub fn with_arguments(mut self, arguments: ArgumentsMetadata) -> Self {
        self.arguments = Some(arguments);
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Finds an option by exact name match over all registered names.
    pub fn find_option(&self, name: &str) -> Option<&OptionMetadata> {
        self.options.iter().find(|o| o.matches(name))
    }

    /// Finds an option by its single-character short form.
    pub fn find_short_option(&self, ch: char) -> Option<&OptionMetadata> {
        self.options.iter().find(|o| o.short_form() == Some(ch))
    }
}
