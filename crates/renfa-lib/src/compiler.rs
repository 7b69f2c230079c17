use renfa_core::Nfa;

use crate::Result;
use crate::parser::Parser;
use crate::trace::{NoopTracer, Tracer};

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

#[derive(Debug, Clone, Copy)]
pub struct CompilerConfig {
    /// Maximum group nesting. `None` disables the check.
    pub recursion_limit: Option<u32>,
}

/// Configurable entry point: pattern in, [`Nfa`] out.
#[derive(Debug, Clone, Copy)]
pub struct Compiler {
    config: CompilerConfig,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    pub fn new() -> Self {
        let config = CompilerConfig {
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        };

        Self { config }
    }

    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub fn compile(&self, source: &str) -> Result<Nfa> {
        self.compile_with(source, &mut NoopTracer)
    }

    /// Like [`compile`](Self::compile), reporting every rule and builder
    /// operation to `tracer`.
    pub fn compile_with<T: Tracer>(&self, source: &str, tracer: &mut T) -> Result<Nfa> {
        Parser::new(source, tracer)
            .with_recursion_limit(self.config.recursion_limit)
            .parse()
    }
}

/// Convert `source` with the default configuration.
pub fn compile(source: &str) -> Result<Nfa> {
    Compiler::new().compile(source)
}
