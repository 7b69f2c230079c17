//! Tracing infrastructure for debugging conversions.
//!
//! The parser is generic over [`Tracer`]. With [`NoopTracer`] every call is an
//! inlined empty function and disappears from the compiled parser. With
//! [`PrintTracer`] the calls are collected as indented text lines.

use renfa_core::Nfa;

use crate::Error;
use crate::build::BuildOp;
use crate::parser::Rule;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Builder operations and errors only.
    #[default]
    Default,
    /// Also grammar rule entry and exit, indented by nesting.
    Verbose,
}

/// Instrumentation hooks called by the parser.
///
/// - `trace_enter` - before a grammar rule runs
/// - `trace_exit` - after a rule produced its fragment
/// - `trace_build` - after a builder operation
/// - `trace_error` - when a rule fails (once per unwound rule)
pub trait Tracer {
    fn trace_enter(&mut self, rule: Rule, offset: usize);

    fn trace_exit(&mut self, rule: Rule, fragment: &Nfa);

    fn trace_build(&mut self, op: BuildOp, fragment: &Nfa);

    fn trace_error(&mut self, rule: Rule, error: &Error);
}

/// Tracer that does nothing.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _rule: Rule, _offset: usize) {}

    #[inline(always)]
    fn trace_exit(&mut self, _rule: Rule, _fragment: &Nfa) {}

    #[inline(always)]
    fn trace_build(&mut self, _op: BuildOp, _fragment: &Nfa) {}

    #[inline(always)]
    fn trace_error(&mut self, _rule: Rule, _error: &Error) {}
}

/// Tracer that collects a readable trace of the conversion.
#[derive(Debug, Default)]
pub struct PrintTracer {
    verbosity: Verbosity,
    depth: usize,
    lines: Vec<String>,
    /// Set once the failing rule has reported; outer rules stay quiet.
    error_reported: bool,
}

impl PrintTracer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined, newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn print(&self) {
        print!("{}", self.output());
    }

    fn push(&mut self, text: String) {
        let indent = match self.verbosity {
            Verbosity::Default => 0,
            Verbosity::Verbose => self.depth * 2,
        };
        self.lines.push(format!("{:indent$}{text}", ""));
    }
}

fn summary(fragment: &Nfa) -> String {
    let finals: Vec<String> = fragment.finals().map(|s| s.to_string()).collect();
    format!(
        "start {}, finals [{}], {} states",
        fragment.start(),
        finals.join(", "),
        fragment.state_count()
    )
}

impl Tracer for PrintTracer {
    fn trace_enter(&mut self, rule: Rule, offset: usize) {
        if self.verbosity == Verbosity::Verbose {
            self.push(format!("{rule} @{offset}"));
        }
        self.depth += 1;
    }

    fn trace_exit(&mut self, rule: Rule, fragment: &Nfa) {
        self.depth = self.depth.saturating_sub(1);
        if self.verbosity == Verbosity::Verbose {
            self.push(format!("{rule} ⇒ {}", summary(fragment)));
        }
    }

    fn trace_build(&mut self, op: BuildOp, fragment: &Nfa) {
        self.push(format!("{op} → {}", summary(fragment)));
    }

    fn trace_error(&mut self, rule: Rule, error: &Error) {
        self.depth = self.depth.saturating_sub(1);
        if self.error_reported {
            return;
        }
        self.error_reported = true;
        self.push(format!("{rule} ✗ {error}"));
    }
}
