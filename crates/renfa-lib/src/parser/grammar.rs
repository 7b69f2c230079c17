//! Grammar rules.
//!
//! ```text
//! regex     := term ( '|' term )*
//! term      := factor*              until ')', '|' or end of input
//! factor    := base ( '*' )*
//! base      := '(' regex ')' | primitive
//! primitive := 'a' | 'b' | 'e'
//! ```

use std::fmt;

use renfa_core::{ALPHABET, EPSILON, Nfa, is_symbol};

use super::core::Parser;
use crate::build::BuildOp;
use crate::trace::Tracer;
use crate::{Error, Expected, Result};

/// Grammar rule, as reported to a [`Tracer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Regex,
    Term,
    Factor,
    Base,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rule::Regex => "regex",
            Rule::Term => "term",
            Rule::Factor => "factor",
            Rule::Base => "base",
        })
    }
}

impl<T: Tracer> Parser<'_, '_, T> {
    /// Whole input as one `regex`. Anything left over is an error.
    pub(super) fn parse_root(&mut self) -> Result<Nfa> {
        let nfa = self.regex()?;

        if self.cursor.has_more() {
            return Err(Error::UnexpectedCharacter {
                expected: Expected::EndOfInput,
                found: self.cursor.peek().ok(),
                offset: self.cursor.offset(),
            });
        }

        Ok(nfa)
    }

    /// Branches are parsed in one loop and folded from the right, so
    /// `x|y|z` is `union(x, union(y, z))` and flat chains do not nest.
    fn regex(&mut self) -> Result<Nfa> {
        self.rule(Rule::Regex, |p| {
            let first = p.branch()?;
            let mut rest = Vec::new();
            while p.cursor.next_is('|') {
                p.cursor.consume_expected('|')?;
                rest.push(p.branch()?);
            }

            let Some(mut acc) = rest.pop() else {
                return Ok(first);
            };
            while let Some(prev) = rest.pop() {
                acc = p.build(BuildOp::Union, |b| b.union(prev, acc));
            }
            Ok(p.build(BuildOp::Union, |b| b.union(first, acc)))
        })
    }

    fn branch(&mut self) -> Result<Nfa> {
        let mut term = self.term()?;
        term.extend_alphabet(ALPHABET);
        Ok(term)
    }

    fn term(&mut self) -> Result<Nfa> {
        self.rule(Rule::Term, |p| {
            let mut acc = p.build(BuildOp::Empty, |b| b.empty());

            while !p.at_term_end() {
                let factor = p.factor()?;
                acc = p.build(BuildOp::Concatenate, |b| b.concatenate(acc, factor));
            }

            Ok(acc)
        })
    }

    fn factor(&mut self) -> Result<Nfa> {
        self.rule(Rule::Factor, |p| {
            let mut nfa = p.base()?;

            while p.cursor.next_is('*') {
                p.cursor.consume_expected('*')?;
                nfa = p.build(BuildOp::Repetition, |b| b.repetition(nfa));
            }

            Ok(nfa)
        })
    }

    fn base(&mut self) -> Result<Nfa> {
        self.rule(Rule::Base, |p| {
            if !p.cursor.next_is('(') {
                return p.primitive();
            }

            p.enter_recursion()?;
            let open = p.cursor.offset();
            p.cursor.consume_expected('(')?;
            // A group needs at least its closing `)`.
            p.cursor.peek()?;

            let inner = p.regex()?;

            if !p.cursor.next_is(')') {
                return Err(Error::UnterminatedGroup {
                    open,
                    offset: p.cursor.offset(),
                });
            }
            p.cursor.consume_expected(')')?;
            p.exit_recursion();

            Ok(inner)
        })
    }

    fn primitive(&mut self) -> Result<Nfa> {
        let offset = self.cursor.offset();
        let c = self.cursor.consume_next()?;

        if c != EPSILON && !is_symbol(c) {
            return Err(Error::UnexpectedCharacter {
                expected: Expected::Symbol,
                found: Some(c),
                offset,
            });
        }

        Ok(self.build(BuildOp::Primitive(c), |b| b.primitive(c)))
    }

    fn at_term_end(&self) -> bool {
        !self.cursor.has_more() || self.cursor.next_is(')') || self.cursor.next_is('|')
    }
}
