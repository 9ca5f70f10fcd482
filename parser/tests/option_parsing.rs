//! Convention-by-convention parsing behavior.
//!
//! Uses one shared command shape throughout: `-a/--alpha` arity 0,
//! `-b/--beta` arity 1, `-c/--charlie` arity 2.

use optline_core::{ArgumentsMetadata, CommandMetadata, OptionMetadata};
use optline_parser::{Convention, ParseError, Parser, ParserConfig};

fn command() -> CommandMetadata {
    CommandMetadata::new("parsing")
        .with_option(OptionMetadata::flag(["-a", "--alpha"]))
        .with_option(OptionMetadata::with_arity(["-b", "--beta"], 1))
        .with_option(OptionMetadata::with_arity(["-c", "--charlie"], 2))
}

fn command_with_args() -> CommandMetadata {
    command().with_arguments(ArgumentsMetadata::new(["input"]).multi_valued())
}

// Standard convention

#[test]
fn test_standard_binds_flag_and_separate_value() {
    let parser = Parser::new(Convention::Standard);
    let result = parser.parse(&command(), ["-a", "--beta", "foo"]).unwrap();

    assert!(result.has_option("--alpha"));
    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_standard_missing_value_for_trailing_option() {
    let parser = Parser::new(Convention::Standard);
    let err = parser.parse(&command(), ["-a", "--beta"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::MissingValue {
            option: "--beta".to_string(),
            expected: 1,
            found: 0,
        }
    );
}

#[test]
fn test_standard_arity_two_needs_both_values() {
    let parser = Parser::new(Convention::Standard);

    let err = parser.parse(&command(), ["-c"]).unwrap_err();
    assert!(matches!(err, ParseError::MissingValue { found: 0, .. }));

    let err = parser.parse(&command(), ["-c", "one"]).unwrap_err();
    assert!(matches!(err, ParseError::MissingValue { found: 1, .. }));

    let result = parser.parse(&command(), ["-c", "one", "two"]).unwrap();
    assert_eq!(result.option_values("--charlie"), ["one", "two"]);
}

#[test]
fn test_standard_value_tokens_are_taken_verbatim() {
    // A value that looks like another option is still a value.
    let parser = Parser::new(Convention::Standard);
    let result = parser.parse(&command(), ["--beta", "-a"]).unwrap();

    assert_eq!(result.option_value("--beta"), Some("-a"));
    assert!(!result.has_option("--alpha"));
}

#[test]
fn test_standard_unrecognized_token_is_positional_when_capacity_remains() {
    let parser = Parser::new(Convention::Standard);
    let result = parser
        .parse(&command_with_args(), ["-a", "one", "two"])
        .unwrap();

    assert_eq!(result.arguments(), ["one", "two"]);
}

#[test]
fn test_standard_unexpected_argument_without_arguments_metadata() {
    let parser = Parser::new(Convention::Standard);
    let err = parser.parse(&command(), ["-a", "stray"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::UnexpectedArgument {
            token: "stray".to_string(),
        }
    );
}

#[test]
fn test_standard_unexpected_argument_when_capacity_exhausted() {
    let fixed = command().with_arguments(ArgumentsMetadata::new(["only"]));
    let parser = Parser::new(Convention::Standard);

    let err = parser.parse(&fixed, ["one", "two"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedArgument {
            token: "two".to_string(),
        }
    );
}

// Classic getopt convention

#[test]
fn test_classic_bundle_with_trailing_inline_value() {
    let parser = Parser::new(Convention::ClassicGetOpt);
    let result = parser.parse(&command(), ["-abfoo"]).unwrap();

    assert!(result.has_option("--alpha"));
    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_classic_arity_one_flag_swallows_token_remainder() {
    // 'b' takes everything after it, including what looks like flag 'a'.
    let parser = Parser::new(Convention::ClassicGetOpt);
    let result = parser.parse(&command(), ["-bfooa"]).unwrap();

    assert!(!result.has_option("--alpha"));
    assert_eq!(result.option_value("--beta"), Some("fooa"));
}

#[test]
fn test_classic_arity_one_flag_takes_next_token_when_remainder_empty() {
    let parser = Parser::new(Convention::ClassicGetOpt);
    let result = parser.parse(&command(), ["-b", "foo"]).unwrap();

    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_classic_bundle_equivalent_to_separate_tokens() {
    let parser = Parser::new(Convention::ClassicGetOpt);
    let bundled = parser.parse(&command(), ["-abfoo"]).unwrap();
    let separate = parser.parse(&command(), ["-a", "-b", "foo"]).unwrap();

    assert_eq!(
        bundled.option_value("--beta"),
        separate.option_value("--beta")
    );
    assert_eq!(
        bundled.has_option("--alpha"),
        separate.has_option("--alpha")
    );
}

#[test]
fn test_classic_missing_value_at_end_of_bundle() {
    let parser = Parser::new(Convention::ClassicGetOpt);
    let err = parser.parse(&command(), ["-ab"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::MissingValue {
            option: "--beta".to_string(),
            expected: 1,
            found: 0,
        }
    );
}

#[test]
fn test_classic_arity_two_mid_bundle_is_unexpected_option() {
    let parser = Parser::new(Convention::ClassicGetOpt);
    let err = parser.parse(&command(), ["-ac"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedOption { option, .. } if option == "-c"
    ));
}

#[test]
fn test_classic_arity_two_as_first_character_is_the_same_error() {
    // One consistent error kind for arity > 1 anywhere in a short token.
    let parser = Parser::new(Convention::ClassicGetOpt);
    let err = parser.parse(&command(), ["-c"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedOption { option, .. } if option == "-c"
    ));
}

#[test]
fn test_classic_unknown_mid_bundle_character_is_unexpected_option() {
    let parser = Parser::new(Convention::ClassicGetOpt);
    let err = parser.parse(&command(), ["-az"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedOption { option, .. } if option == "-z"
    ));
}

#[test]
fn test_classic_unknown_first_character_falls_through_to_positional() {
    let parser = Parser::new(Convention::ClassicGetOpt);

    let result = parser.parse(&command_with_args(), ["-z"]).unwrap();
    assert_eq!(result.arguments(), ["-z"]);

    let err = parser.parse(&command(), ["-z"]).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedArgument { .. }));
}

#[test]
fn test_classic_double_dash_token_is_not_a_short_group() {
    let parser = Parser::with_config(
        ParserConfig::new(Convention::ClassicGetOpt).without_arguments_separator(),
    );
    let err = parser.parse(&command(), ["--alpha"]).unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedArgument { .. }));
}

// Long getopt convention

#[test]
fn test_long_getopt_inline_value_short_name() {
    let parser = Parser::new(Convention::LongGetOpt);
    let result = parser.parse(&command(), ["-b=foo"]).unwrap();

    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_long_getopt_inline_value_long_name() {
    let parser = Parser::new(Convention::LongGetOpt);
    let result = parser.parse(&command(), ["--beta=foo"]).unwrap();

    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_long_getopt_rejects_separate_token_value() {
    // Inline is the only accepted form: the bare flag falls through as an
    // argument, a deliberate rejection rather than a fallback.
    let parser = Parser::new(Convention::LongGetOpt);
    let err = parser.parse(&command(), ["--beta", "foo"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::UnexpectedArgument {
            token: "--beta".to_string(),
        }
    );
}

#[test]
fn test_long_getopt_declines_options_of_other_arity() {
    let parser = Parser::new(Convention::LongGetOpt);
    let err = parser.parse(&command(), ["--charlie=foo"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::UnexpectedArgument {
            token: "--charlie=foo".to_string(),
        }
    );
}

#[test]
fn test_long_getopt_value_keeps_later_separators() {
    let parser = Parser::new(Convention::LongGetOpt);
    let result = parser.parse(&command(), ["--beta=a=b"]).unwrap();

    assert_eq!(result.option_value("--beta"), Some("a=b"));
}

// Key-value convention

#[test]
fn test_key_value_with_colon_separator() {
    let parser = Parser::new(Convention::KeyValue { separator: ':' });

    let result = parser.parse(&command(), ["-b:foo"]).unwrap();
    assert_eq!(result.option_value("--beta"), Some("foo"));

    let result = parser.parse(&command(), ["--beta:foo"]).unwrap();
    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_key_value_with_semicolon_separator() {
    let parser = Parser::new(Convention::KeyValue { separator: ';' });

    let result = parser.parse(&command(), ["-b;foo"]).unwrap();
    assert_eq!(result.option_value("--beta"), Some("foo"));
}

#[test]
fn test_key_value_rejects_separate_token_value() {
    let parser = Parser::new(Convention::KeyValue { separator: ':' });
    let err = parser.parse(&command(), ["--beta", "foo"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::UnexpectedArgument {
            token: "--beta".to_string(),
        }
    );
}

#[test]
fn test_key_value_agrees_with_standard_for_plain_values() {
    let standard = Parser::new(Convention::Standard);
    let key_value = Parser::new(Convention::KeyValue { separator: ':' });

    let a = standard.parse(&command(), ["--beta", "foo"]).unwrap();
    let b = key_value.parse(&command(), ["--beta:foo"]).unwrap();

    assert_eq!(a.option_value("--beta"), b.option_value("--beta"));
}

// List-value convention

#[test]
fn test_list_value_splits_to_declared_arity() {
    let parser = Parser::new(Convention::ListValue { separator: ',' });
    let result = parser.parse(&command(), ["-c", "one,two"]).unwrap();

    assert_eq!(result.option_values("--charlie"), ["one", "two"]);
}

#[test]
fn test_list_value_missing_value_token() {
    let parser = Parser::new(Convention::ListValue { separator: ',' });
    let err = parser.parse(&command(), ["-c"]).unwrap_err();

    assert_eq!(
        err,
        ParseError::MissingValue {
            option: "--charlie".to_string(),
            expected: 2,
            found: 0,
        }
    );
}

#[test]
fn test_list_value_too_few_parts_is_unexpected_option() {
    let parser = Parser::new(Convention::ListValue { separator: ',' });
    let err = parser.parse(&command(), ["-c", "one"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedOption { option, .. } if option == "--charlie"
    ));
}

#[test]
fn test_list_value_too_many_parts_is_unexpected_option() {
    let parser = Parser::new(Convention::ListValue { separator: ',' });
    let err = parser.parse(&command(), ["-c", "one,two,three"]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::UnexpectedOption { option, .. } if option == "--charlie"
    ));
}

#[test]
fn test_list_value_multi_valued_accepts_any_part_count() {
    let multi = CommandMetadata::new("parsing")
        .with_option(OptionMetadata::with_arity(["-t", "--tag"], 1).multi_valued());
    let parser = Parser::new(Convention::ListValue { separator: ',' });

    let result = parser.parse(&multi, ["-t", "a,b,c"]).unwrap();
    assert_eq!(result.option_values("--tag"), ["a", "b", "c"]);
}

#[test]
fn test_list_value_flags_bind_like_standard() {
    let parser = Parser::new(Convention::ListValue { separator: ',' });
    let result = parser.parse(&command(), ["-a"]).unwrap();

    assert!(result.has_option("--alpha"));
}

// Multiplicity

#[test]
fn test_repeated_occurrence_overwrites_without_multi_valued() {
    let parser = Parser::new(Convention::Standard);
    let result = parser
        .parse(&command(), ["--beta", "one", "--beta", "two"])
        .unwrap();

    let bound = result.option("--beta").unwrap();
    assert_eq!(bound.occurrences, 2);
    assert_eq!(bound.values, ["two"]);
}

#[test]
fn test_repeated_occurrence_accumulates_when_multi_valued() {
    let multi = CommandMetadata::new("parsing")
        .with_option(OptionMetadata::with_arity(["-t", "--tag"], 1).multi_valued());
    let parser = Parser::new(Convention::Standard);

    let result = parser
        .parse(&multi, ["-t", "one", "--tag", "two"])
        .unwrap();
    assert_eq!(result.option_values("--tag"), ["one", "two"]);
}

// Arguments separator

#[test]
fn test_separator_routes_remainder_to_positionals() {
    let parser = Parser::new(Convention::Standard);
    let result = parser
        .parse(&command_with_args(), ["-a", "--", "-b", "foo"])
        .unwrap();

    assert!(result.has_option("--alpha"));
    assert!(!result.has_option("--beta"));
    assert_eq!(result.arguments(), ["-b", "foo"]);
}

#[test]
fn test_separator_remainder_still_respects_capacity() {
    let parser = Parser::new(Convention::Standard);
    let err = parser.parse(&command(), ["--", "stray"]).unwrap_err();

    assert!(matches!(err, ParseError::UnexpectedArgument { .. }));
}

#[test]
fn test_separator_can_be_disabled() {
    let parser = Parser::with_config(
        ParserConfig::new(Convention::Standard).without_arguments_separator(),
    );
    let result = parser
        .parse(&command_with_args(), ["--", "-b", "foo"])
        .unwrap();

    // "--" is now an ordinary unrecognized token, and "-b" parses normally.
    assert_eq!(result.option_value("--beta"), Some("foo"));
    assert_eq!(result.arguments(), ["--"]);
}

// Token accounting

#[test]
fn test_every_token_is_consumed_exactly_once() {
    let parser = Parser::new(Convention::Standard);
    let tokens = ["-a", "--beta", "foo", "-c", "one", "two", "pos1", "pos2"];
    let result = parser.parse(&command_with_args(), tokens).unwrap();

    let option_names: usize = result.options().map(|b| b.occurrences).sum();
    let option_values: usize = result.options().map(|b| b.values.len()).sum();
    let positionals = result.arguments().len();

    assert_eq!(option_names + option_values + positionals, tokens.len());
}

#[test]
fn test_parser_is_reusable_across_parses() {
    let parser = Parser::new(Convention::Standard);
    let first = parser.parse(&command(), ["-a"]).unwrap();
    let second = parser.parse(&command(), ["--beta", "x"]).unwrap();

    assert!(first.has_option("--alpha"));
    assert!(!second.has_option("--alpha"));
    assert_eq!(second.option_value("--beta"), Some("x"));
}
