use renfa_lib::NoopTracer;

use super::run_common::{self, PatternInput};

pub struct CheckArgs {
    pub input: PatternInput,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let pattern = run_common::load_or_exit(&args.input);
    run_common::compile_or_exit(&pattern, args.recursion_limit, &mut NoopTracer, args.color);

    // Silent on success (like cargo check)
}
