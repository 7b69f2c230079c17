//! Trace NFA construction for debugging.

use renfa_lib::{NfaPrinter, PrintTracer, Verbosity};

use super::run_common::{self, PatternInput};

pub struct TraceArgs {
    pub input: PatternInput,
    pub verbosity: Verbosity,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let pattern = run_common::load_or_exit(&args.input);
    let mut tracer = PrintTracer::new(args.verbosity);

    let result = run_common::compiler(args.recursion_limit).compile_with(&pattern.source, &mut tracer);
    tracer.print();

    match result {
        Ok(nfa) => {
            println!("---");
            print!("{}", NfaPrinter::new(&nfa).dump());
        }
        Err(e) => {
            run_common::report(&e, &pattern, args.color);
            std::process::exit(1);
        }
    }
}
