//! renfa: regular expressions over `{a, b}` to NFAs via Thompson's construction.
//!
//! # Example
//!
//! ```
//! use renfa_lib::{Simulator, compile};
//!
//! let nfa = compile("(a|b)*a").expect("valid pattern");
//! let sim = Simulator::new(&nfa);
//!
//! assert!(sim.accepts("bba"));
//! assert!(!sim.accepts("ab"));
//! ```
//!
//! # Grammar
//!
//! ```text
//! regex     := term ( '|' term )*
//! term      := factor*
//! factor    := base ( '*' )*
//! base      := '(' regex ')' | primitive
//! primitive := 'a' | 'b' | 'e'
//! ```
//!
//! `e` is the empty-string literal, never an input symbol.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod build;
pub mod diagnostics;
pub mod dump;
pub mod engine;
pub mod parser;
pub mod trace;

mod compiler;


use std::fmt;
use std::ops::Range;

pub use compiler::{Compiler, CompilerConfig, DEFAULT_RECURSION_LIMIT, compile};
pub use diagnostics::ErrorPrinter;
pub use dump::NfaPrinter;
pub use engine::Simulator;
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

pub use renfa_core::{ALPHABET, EPSILON, Label, Nfa, StateId};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific metacharacter, e.g. the `)` closing a group.
    Char(char),
    /// An alphabet symbol, the `e` literal, or `(`.
    Symbol,
    /// Nothing: the pattern should have ended.
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "`{c}`"),
            Expected::Symbol => f.write_str("`a`, `b`, `e` or `(`"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Errors that abort a conversion. There is no partial result.
///
/// Offsets are byte offsets into the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("expected {expected}, found {}", found_text(.found))]
    UnexpectedCharacter {
        expected: Expected,
        found: Option<char>,
        offset: usize,
    },

    #[error("unterminated group: `(` at offset {open} is never closed")]
    UnterminatedGroup { open: usize, offset: usize },

    #[error("expected a token at offset {offset}, found end of input")]
    EmptyInputAtToken { offset: usize },

    /// Group nesting exceeded the configured limit.
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimitExceeded { limit: u32, offset: usize },
}

impl Error {
    /// Byte offset at which the parser gave up.
    pub fn offset(&self) -> usize {
        match self {
            Error::UnexpectedCharacter { offset, .. }
            | Error::UnterminatedGroup { offset, .. }
            | Error::EmptyInputAtToken { offset }
            | Error::RecursionLimitExceeded { offset, .. } => *offset,
        }
    }

    /// Source range to highlight. Empty at end of input.
    pub fn span(&self) -> Range<usize> {
        match self {
            Error::UnexpectedCharacter {
                found: Some(c),
                offset,
                ..
            } => *offset..*offset + c.len_utf8(),
            Error::UnterminatedGroup { open, offset } => *open..*offset,
            _ => self.offset()..self.offset(),
        }
    }

    /// Short label for the highlighted span.
    pub fn label(&self) -> String {
        match self {
            Error::UnexpectedCharacter { expected, .. } => format!("expected {expected} here"),
            Error::UnterminatedGroup { .. } => "missing `)`".to_string(),
            Error::EmptyInputAtToken { .. } => "pattern ends here".to_string(),
            Error::RecursionLimitExceeded { .. } => "nested too deeply".to_string(),
        }
    }
}

fn found_text(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("`{c}`"),
        None => "end of input".to_string(),
    }
}

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, Error>;
