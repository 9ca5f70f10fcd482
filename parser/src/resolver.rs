//! Option resolution for candidate flag strings.
//!
//! Matching is exact: a full candidate either equals one of an option's
//! registered names or it does not. There is no prefix or fuzzy matching —
//! every convention resolves a complete candidate string per call, so
//! ambiguity can never be silently resolved. Hidden options resolve like any
//! other; hiding only affects help rendering.

use optline_core::{CommandMetadata, OptionMetadata};

/// Resolves a full candidate name (e.g. `-b` or `--beta`) against the
/// command's option set.
pub(crate) fn resolve_name<'a>(
    command: &'a CommandMetadata,
    candidate: &str,
) -> Option<&'a OptionMetadata> {
    command.options.iter().find(|o| o.matches(candidate))
}

/// Resolves a single flag character from a bundled short-option token.
///
/// Matches only options that registered a one-dash single-character form.
pub(crate) fn resolve_short(command: &CommandMetadata, ch: char) -> Option<&OptionMetadata> {
    command.options.iter().find(|o| o.short_form() == Some(ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use optline_core::OptionMetadata;

    fn command() -> CommandMetadata {
        CommandMetadata::new("test")
            .with_option(OptionMetadata::flag(["-a", "--alpha"]))
            .with_option(OptionMetadata::with_arity(["--long-only"], 1))
            .with_option(OptionMetadata::flag(["-h"]).hidden())
    }

    #[test]
    fn test_resolve_name_is_exact() {
        let command = command();
        assert!(resolve_name(&command, "--alpha").is_some());
        assert!(resolve_name(&command, "--alph").is_none());
        assert!(resolve_name(&command, "--alphabet").is_none());
    }

    #[test]
    fn test_resolve_short_only_matches_registered_short_forms() {
        let command = command();
        assert!(resolve_short(&command, 'a').is_some());
        // "--long-only" has no single-character form
        assert!(resolve_short(&command, 'l').is_none());
    }

    #[test]
    fn test_hidden_options_still_resolve() {
        let command = command();
        assert!(resolve_name(&command, "-h").is_some());
    }
}
