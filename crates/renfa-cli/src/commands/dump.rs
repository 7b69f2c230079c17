//! Print the automaton as text or JSON.

use renfa_lib::{NfaPrinter, NoopTracer};

use super::run_common::{self, PatternInput};
use crate::cli::OutputFormat;

pub struct DumpArgs {
    pub input: PatternInput,
    pub format: OutputFormat,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let pattern = run_common::load_or_exit(&args.input);
    let nfa =
        run_common::compile_or_exit(&pattern, args.recursion_limit, &mut NoopTracer, args.color);

    match args.format {
        OutputFormat::Text => print!("{}", NfaPrinter::new(&nfa).dump()),
        OutputFormat::Json => match serde_json::to_string_pretty(&nfa) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
    }
}
