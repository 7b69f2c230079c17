//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Unified flags: commands accept flags they ignore
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Positional shifting: -f turns the first exec positional into an input
//! 4. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use renfa_lib::{DEFAULT_RECURSION_LIMIT, Verbosity};

use super::*;
use crate::cli::commands::{check_command, dump_command, exec_command, trace_command};

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}

#[test]
fn check_extracts_pattern() {
    let m = check_command()
        .try_get_matches_from(["check", "(a|b)*"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("(a|b)*"));
    assert_eq!(params.file, None);
    assert_eq!(params.recursion_limit, Some(DEFAULT_RECURSION_LIMIT));
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_accepts_hidden_flags() {
    let result = check_command().try_get_matches_from(["check", "a", "--format", "json", "-v"]);

    assert!(
        result.is_ok(),
        "check should accept unified flags: {:?}",
        result.err()
    );
}

#[test]
fn check_help_hides_unused_flags() {
    let help = check_command().render_help().to_string();

    assert!(!help.contains("--format"));
    assert!(!help.contains("--verbose"));
    assert!(help.contains("--max-depth"));
}

#[test]
fn dump_extracts_format() {
    let m = dump_command()
        .try_get_matches_from(["dump", "ab", "--format", "json", "--color", "never"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.format, OutputFormat::Json);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn dump_rejects_unknown_format() {
    let result = dump_command().try_get_matches_from(["dump", "ab", "--format", "yaml"]);

    assert!(result.is_err());
}

#[test]
fn max_depth_zero_disables_limit() {
    let m = dump_command()
        .try_get_matches_from(["dump", "ab", "--max-depth", "0"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).recursion_limit, None);

    let m = dump_command()
        .try_get_matches_from(["dump", "ab", "--max-depth", "8"])
        .unwrap();
    assert_eq!(DumpParams::from_matches(&m).recursion_limit, Some(8));
}

#[test]
fn exec_collects_inputs() {
    let m = exec_command()
        .try_get_matches_from(["exec", "a*", "", "aa", "b"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern.as_deref(), Some("a*"));
    assert_eq!(params.inputs, vec!["", "aa", "b"]);
}

#[test]
fn exec_file_shifts_positional_to_inputs() {
    let m = exec_command()
        .try_get_matches_from(["exec", "-f", "pattern.re", "aab", "bba"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.file, Some(PathBuf::from("pattern.re")));
    assert_eq!(params.inputs, vec!["aab", "bba"]);
}

#[test]
fn exec_file_with_single_input() {
    let m = exec_command()
        .try_get_matches_from(["exec", "--file", "pattern.re", "ab"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern, None);
    assert_eq!(params.inputs, vec!["ab"]);
}

#[test]
fn trace_verbosity() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a|b"])
        .unwrap();
    assert_eq!(TraceParams::from_matches(&m).verbosity, Verbosity::Default);

    let m = trace_command()
        .try_get_matches_from(["trace", "a|b", "-v"])
        .unwrap();
    assert_eq!(TraceParams::from_matches(&m).verbosity, Verbosity::Verbose);
}

#[test]
fn trace_accepts_hidden_format() {
    let result = trace_command().try_get_matches_from(["trace", "a", "--format", "text"]);

    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["renfa"]);

    assert!(result.is_err());
}

#[test]
fn always_colorizes() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());
}
