//! Run inputs against the automaton and report acceptance.

use std::fmt::Write;

use serde::Serialize;

use renfa_lib::{NoopTracer, Simulator};

use super::run_common::{self, PatternInput};
use crate::cli::OutputFormat;

pub struct ExecArgs {
    pub input: PatternInput,
    pub inputs: Vec<String>,
    pub format: OutputFormat,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Verdict<'a> {
    pub input: &'a str,
    pub accepted: bool,
}

pub fn run(args: ExecArgs) {
    if args.inputs.is_empty() {
        eprintln!("error: at least one input is required");
        std::process::exit(1);
    }

    let pattern = run_common::load_or_exit(&args.input);
    let nfa =
        run_common::compile_or_exit(&pattern, args.recursion_limit, &mut NoopTracer, args.color);

    let verdicts = evaluate(&Simulator::new(&nfa), &args.inputs);

    match args.format {
        OutputFormat::Text => print!("{}", format_text(&verdicts)),
        OutputFormat::Json => match serde_json::to_string_pretty(&verdicts) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }

    if verdicts.iter().any(|v| !v.accepted) {
        std::process::exit(1);
    }
}

pub fn evaluate<'a>(sim: &Simulator<'_>, inputs: &'a [String]) -> Vec<Verdict<'a>> {
    inputs
        .iter()
        .map(|input| Verdict {
            input,
            accepted: sim.accepts(input),
        })
        .collect()
}

/// One `accept`/`reject` line per input. Inputs are quoted so `""` stays visible.
pub fn format_text(verdicts: &[Verdict<'_>]) -> String {
    let mut out = String::new();
    for v in verdicts {
        let word = if v.accepted { "accept" } else { "reject" };
        writeln!(out, "{word} {:?}", v.input).expect("String write never fails");
    }
    out
}
