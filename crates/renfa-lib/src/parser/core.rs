//! Parser state and low-level operations.

use renfa_core::Nfa;

use super::cursor::Cursor;
use super::grammar::Rule;
use crate::build::{BuildOp, FragmentBuilder};
use crate::trace::Tracer;
use crate::{Error, Result};

/// State of one conversion: input cursor, fragment builder and tracer.
pub struct Parser<'src, 't, T: Tracer> {
    pub(super) cursor: Cursor<'src>,
    pub(super) builder: FragmentBuilder,
    pub(super) tracer: &'t mut T,
    depth: u32,
    recursion_limit: Option<u32>,
}

impl<'src, 't, T: Tracer> Parser<'src, 't, T> {
    pub fn new(source: &'src str, tracer: &'t mut T) -> Self {
        Self {
            cursor: Cursor::new(source),
            builder: FragmentBuilder::new(),
            tracer,
            depth: 0,
            recursion_limit: None,
        }
    }

    /// Bound group nesting. `None` means unbounded.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Convert the whole input. Consumes the parser.
    pub fn parse(mut self) -> Result<Nfa> {
        let nfa = self.parse_root()?;
        debug_assert!(
            nfa.check_invariants().is_ok(),
            "parser produced a malformed automaton: {:?}",
            nfa.check_invariants()
        );
        Ok(nfa)
    }

    /// Run one grammar rule, reporting entry and outcome to the tracer.
    pub(super) fn rule(
        &mut self,
        rule: Rule,
        parse: impl FnOnce(&mut Self) -> Result<Nfa>,
    ) -> Result<Nfa> {
        self.tracer.trace_enter(rule, self.cursor.offset());
        let result = parse(self);
        match &result {
            Ok(fragment) => self.tracer.trace_exit(rule, fragment),
            Err(err) => self.tracer.trace_error(rule, err),
        }
        result
    }

    /// Run one builder operation and report the resulting fragment.
    pub(super) fn build(
        &mut self,
        op: BuildOp,
        build: impl FnOnce(&mut FragmentBuilder) -> Nfa,
    ) -> Nfa {
        let fragment = build(&mut self.builder);
        self.tracer.trace_build(op, &fragment);
        fragment
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded {
                limit,
                offset: self.cursor.offset(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
