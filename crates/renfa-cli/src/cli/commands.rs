//! Command builders for the CLI.
//!
//! Every command accepts the same flag set; flags a command does not use are
//! hidden from its `--help` and ignored.

use clap::Command;

use super::args::*;

/// Add hidden output format arg (for commands that print no automaton).
fn with_hidden_format_arg(cmd: Command) -> Command {
    cmd.arg(format_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("renfa")
        .about("Convert regular expressions over {a, b} to NFAs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(trace_command())
}

/// Validate a pattern.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  renfa check <PATTERN>
  renfa check -f <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  renfa check '(a|b)*a'         # silent on success
  renfa check -f pattern.re     # pattern from a file"#,
        )
        .arg(pattern_arg())
        .arg(file_arg())
        .arg(max_depth_arg())
        .arg(color_arg());

    with_hidden_trace_args(with_hidden_format_arg(cmd))
}

/// Print the automaton built for a pattern.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the NFA built for a pattern")
        .override_usage(
            "\
  renfa dump <PATTERN> [--format text|json]
  renfa dump -f <FILE> [--format text|json]",
        )
        .after_help(
            r#"EXAMPLES:
  renfa dump 'ab*'              # one line per state
  renfa dump 'ab*' --format json"#,
        )
        .arg(pattern_arg())
        .arg(file_arg())
        .arg(format_arg())
        .arg(max_depth_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd)
}

/// Run input strings against a pattern.
pub fn exec_command() -> Command {
    let cmd = Command::new("exec")
        .about("Check which inputs the pattern accepts")
        .override_usage(
            "\
  renfa exec <PATTERN> <INPUT>...
  renfa exec -f <FILE> <INPUT>...",
        )
        .after_help(
            r#"EXAMPLES:
  renfa exec '(a|b)*a' bba ab   # accept/reject per input
  renfa exec -f pattern.re aab  # first positional is an input with -f
  renfa exec 'a*' '' --format json"#,
        )
        .arg(pattern_arg())
        .arg(inputs_arg())
        .arg(file_arg())
        .arg(format_arg())
        .arg(max_depth_arg())
        .arg(color_arg());

    with_hidden_trace_args(cmd)
}

/// Trace the construction of a pattern.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace NFA construction for debugging")
        .override_usage(
            "\
  renfa trace <PATTERN> [-v]
  renfa trace -f <FILE> [-v]",
        )
        .after_help(
            r#"EXAMPLES:
  renfa trace 'a|b'             # builder operations
  renfa trace 'a|b' -v          # also grammar rules"#,
        )
        .arg(pattern_arg())
        .arg(file_arg())
        .arg(verbose_arg())
        .arg(max_depth_arg())
        .arg(color_arg());

    with_hidden_format_arg(cmd)
}
