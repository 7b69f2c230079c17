//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields, ignoring hidden ones
//! - `Into<*Args>` impls bridge dispatch to command handlers
//! - With `-f`, exec treats its first positional as an input

use std::path::PathBuf;

use clap::ArgMatches;
use renfa_lib::{DEFAULT_RECURSION_LIMIT, Verbosity};

use super::{ColorChoice, OutputFormat};
use crate::commands::check::CheckArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::exec::ExecArgs;
use crate::commands::run_common::PatternInput;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: PatternInput {
                text: p.pattern,
                file: p.file,
            },
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub format: OutputFormat,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            format: parse_format(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: PatternInput {
                text: p.pattern,
                file: p.file,
            },
            format: p.format,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub inputs: Vec<String>,
    pub format: OutputFormat,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let file = m.get_one::<PathBuf>("file").cloned();
        let pattern = m.get_one::<String>("pattern").cloned();
        let inputs: Vec<String> = m
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let (pattern, inputs) = shift_positional_to_inputs(file.is_some(), pattern, inputs);

        Self {
            pattern,
            file,
            inputs,
            format: parse_format(m),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            input: PatternInput {
                text: p.pattern,
                file: p.file,
            },
            inputs: p.inputs,
            format: p.format,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern: Option<String>,
    pub file: Option<PathBuf>,
    pub verbosity: Verbosity,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let verbosity = if m.get_flag("verbose") {
            Verbosity::Verbose
        } else {
            Verbosity::Default
        };

        Self {
            pattern: m.get_one::<String>("pattern").cloned(),
            file: m.get_one::<PathBuf>("file").cloned(),
            verbosity,
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            input: PatternInput {
                text: p.pattern,
                file: p.file,
            },
            verbosity: p.verbosity,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}

/// `--max-depth 0` disables the limit; no flag means the library default.
fn parse_recursion_limit(m: &ArgMatches) -> Option<u32> {
    match m.get_one::<u32>("max_depth").copied() {
        Some(0) => None,
        Some(n) => Some(n),
        None => Some(DEFAULT_RECURSION_LIMIT),
    }
}

/// When -f is used, the pattern positional actually holds the first input.
/// This enables: `renfa exec -f pattern.re aab bba`
fn shift_positional_to_inputs(
    has_file: bool,
    pattern: Option<String>,
    mut inputs: Vec<String>,
) -> (Option<String>, Vec<String>) {
    match pattern {
        Some(first) if has_file => {
            inputs.insert(0, first);
            (None, inputs)
        }
        pattern => (pattern, inputs),
    }
}
