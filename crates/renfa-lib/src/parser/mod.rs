//! Recursive-descent parser driving the fragment builder.
//!
//! # Architecture
//!
//! Each grammar rule is one method on [`Parser`] returning a finished
//! fragment. Rules never produce partial results: the first error unwinds
//! the whole descent through `?`.
//!
//! - [`Cursor`] owns the unconsumed input.
//! - [`FragmentBuilder`](crate::build::FragmentBuilder) owns the state
//!   counter, so names are unique within one conversion.
//! - `Parser::parse` takes `self`, so cursor and counter cannot be reused
//!   for a second conversion.
//!
//! Group nesting is bounded by an optional recursion limit. Alternation
//! chains are parsed in a loop and do not count toward it.

mod core;
mod cursor;
mod grammar;

#[cfg(test)]
mod cursor_tests;

pub use core::Parser;
pub use cursor::Cursor;
pub use grammar::Rule;
