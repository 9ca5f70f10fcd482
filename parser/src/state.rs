//! Mutable state for a single parse invocation.
//!
//! [`ParseState`] owns the token cursor and the binding accumulators. One
//! instance exists per parse call and is dropped when parsing ends, so the
//! engine itself stays stateless and reusable across threads.

use optline_core::OptionMetadata;

use crate::result::BoundOption;

/// Cursor over the raw tokens plus accumulators for bound values.
///
/// Tokens are never re-ordered; each is consumed exactly once — into an
/// option occurrence, a positional argument, or an error. `active_group`
/// marks an in-progress short-option token being consumed character by
/// character under the classic getopt convention.
#[derive(Debug)]
pub(crate) struct ParseState {
    tokens: Vec<String>,
    cursor: usize,
    bound: Vec<BoundOption>,
    arguments: Vec<String>,
    active_group: Option<String>,
}

impl ParseState {
    pub(crate) fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            cursor: 0,
            bound: Vec::new(),
            arguments: Vec::new(),
            active_group: None,
        }
    }

    /// Next unconsumed token, without advancing.
    pub(crate) fn peek(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    /// Consumes and returns the next token.
    pub(crate) fn advance(&mut self) -> Option<String> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    pub(crate) fn has_more(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Whether a short-option group is still being consumed.
    pub(crate) fn in_group(&self) -> bool {
        self.active_group.is_some()
    }

    /// Records the unconsumed remainder of a short-option token.
    ///
    /// An empty remainder means the group is exhausted and is not recorded.
    pub(crate) fn begin_group(&mut self, rest: String) {
        if !rest.is_empty() {
            self.active_group = Some(rest);
        }
    }

    /// Pops the next flag character off the active group.
    ///
    /// Returns the character and the remainder after it; the group marker is
    /// cleared and must be re-established via [`begin_group`](Self::begin_group)
    /// if the remainder is to be consumed as further flags.
    pub(crate) fn take_group(&mut self) -> Option<(char, String)> {
        let group = self.active_group.take()?;
        let mut chars = group.chars();
        let ch = chars.next()?;
        Some((ch, chars.as_str().to_string()))
    }

    /// Binds one occurrence of an option.
    ///
    /// Multi-valued options accumulate each occurrence's values in encounter
    /// order; otherwise the latest occurrence overwrites the previous one.
    pub(crate) fn bind_option(&mut self, option: &OptionMetadata, values: Vec<String>) {
        if let Some(existing) = self.bound.iter_mut().find(|b| b.option.names == option.names) {
            existing.occurrences += 1;
            if option.multi_valued {
                existing.values.extend(values);
            } else {
                existing.values = values;
            }
        } else {
            self.bound.push(BoundOption {
                option: option.clone(),
                occurrences: 1,
                values,
            });
        }
    }

    pub(crate) fn bind_argument(&mut self, value: String) {
        self.arguments.push(value);
    }

    pub(crate) fn is_bound(&self, option: &OptionMetadata) -> bool {
        self.bound.iter().any(|b| b.option.names == option.names)
    }

    pub(crate) fn bound_options(&self) -> &[BoundOption] {
        &self.bound
    }

    pub(crate) fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Bulk-consumes every remaining token, returning them in order.
    ///
    /// Used once option recognition ends, e.g. after an arguments separator.
    pub(crate) fn remaining_as_arguments(&mut self) -> Vec<String> {
        self.tokens.split_off(self.cursor)
    }

    pub(crate) fn into_parts(self) -> (Vec<BoundOption>, Vec<String>) {
        (self.bound, self.arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut state = ParseState::new(tokens(&["-a", "-b"]));
        assert_eq!(state.peek(), Some("-a"));
        assert_eq!(state.peek(), Some("-a"));
        assert_eq!(state.advance().as_deref(), Some("-a"));
        assert_eq!(state.peek(), Some("-b"));
    }

    #[test]
    fn test_advance_past_end_returns_none() {
        let mut state = ParseState::new(tokens(&["x"]));
        assert!(state.has_more());
        state.advance();
        assert!(!state.has_more());
        assert_eq!(state.advance(), None);
    }

    #[test]
    fn test_group_cursor_pops_one_char_at_a_time() {
        let mut state = ParseState::new(Vec::new());
        state.begin_group("ab".to_string());
        assert!(state.in_group());

        let (ch, rest) = state.take_group().expect("group is active");
        assert_eq!(ch, 'a');
        assert_eq!(rest, "b");
        assert!(!state.in_group());

        state.begin_group(rest);
        let (ch, rest) = state.take_group().expect("group is active");
        assert_eq!(ch, 'b');
        assert!(rest.is_empty());

        state.begin_group(rest);
        assert!(!state.in_group());
    }

    #[test]
    fn test_bind_option_last_write_wins() {
        let option = OptionMetadata::with_arity(["-b", "--beta"], 1);
        let mut state = ParseState::new(Vec::new());
        state.bind_option(&option, vec!["one".into()]);
        state.bind_option(&option, vec!["two".into()]);

        let bound = &state.bound_options()[0];
        assert_eq!(bound.occurrences, 2);
        assert_eq!(bound.values, vec!["two"]);
    }

    #[test]
    fn test_bind_option_multi_valued_accumulates() {
        let option = OptionMetadata::with_arity(["-t", "--tag"], 1).multi_valued();
        let mut state = ParseState::new(Vec::new());
        state.bind_option(&option, vec!["one".into()]);
        state.bind_option(&option, vec!["two".into()]);

        let bound = &state.bound_options()[0];
        assert_eq!(bound.occurrences, 2);
        assert_eq!(bound.values, vec!["one", "two"]);
    }

    #[test]
    fn test_remaining_as_arguments_drains_tokens() {
        let mut state = ParseState::new(tokens(&["-a", "x", "y"]));
        state.advance();
        assert_eq!(state.remaining_as_arguments(), vec!["x", "y"]);
        assert!(!state.has_more());
    }
}
