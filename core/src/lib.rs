//! Core metadata types and value restrictions for CLI option parsing.
//!
//! This crate defines the foundational types a parsing engine works against:
//!
//! - [`CommandMetadata`] — the full parsing contract for one command (option
//!   set plus optional positional arguments).
//! - [`OptionMetadata`] — a named option with arity, multiplicity, and
//!   required/hidden flags.
//! - [`ArgumentsMetadata`] — positional arguments with titles and capacity.
//! - [`Restriction`] — declarative constraints checked against bound values,
//!   with owner-aware violation messages ([`RestrictionError`]).
//!
//! All metadata is immutable once built and safe to share across concurrent
//! parses. How the metadata is constructed — builder calls, declarative JSON,
//! generated code — is outside this crate's concern; the types simply derive
//! [`serde`] so any of those mechanisms work.
//!
//! # Example
//!
//! ```
//! use optline_core::*;
//!
//! let command = CommandMetadata::new("publish")
//!     .with_option(OptionMetadata::flag(["-v", "--verbose"]))
//!     .with_option(
//!         OptionMetadata::with_arity(["-t", "--tag"], 1)
//!             .multi_valued()
//!             .with_restriction(Restriction::NotEmpty),
//!     )
//!     .with_arguments(ArgumentsMetadata::new(["package"]).required());
//!
//! assert!(command.find_option("--tag").is_some());
//! assert_eq!(command.arguments.as_ref().unwrap().title(), "package");
//! ```

mod metadata;
mod restriction;

pub use metadata::{ArgumentsMetadata, CommandMetadata, OptionMetadata};
pub use restriction::{Restriction, RestrictionError};
