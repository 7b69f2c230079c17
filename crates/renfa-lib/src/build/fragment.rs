use std::fmt;

use renfa_core::{EPSILON, Label, Nfa, StateId};

use super::NameGenerator;

/// Builder operation, as reported to a [`Tracer`](crate::Tracer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOp {
    Empty,
    Primitive(char),
    Concatenate,
    Union,
    Repetition,
}

impl fmt::Display for BuildOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildOp::Empty => f.write_str("empty"),
            BuildOp::Primitive(c) => write!(f, "primitive `{c}`"),
            BuildOp::Concatenate => f.write_str("concatenate"),
            BuildOp::Union => f.write_str("union"),
            BuildOp::Repetition => f.write_str("repetition"),
        }
    }
}

/// Creates and composes fragments. Owns the name counter of one conversion.
#[derive(Debug, Default)]
pub struct FragmentBuilder {
    names: NameGenerator,
}

impl FragmentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states created so far.
    pub fn issued_states(&self) -> u32 {
        self.names.issued()
    }

    /// Accepts only the empty string: `s ─ε→ (f)`. Seeds every term.
    pub fn empty(&mut self) -> Nfa {
        let start = self.names.fresh();
        let end = self.names.fresh();

        let mut nfa = Nfa::new(start);
        nfa.add_final(end);
        nfa.add_transition(start, Label::Epsilon, end);
        nfa
    }

    /// Single symbol, or the empty string for the epsilon marker.
    pub fn primitive(&mut self, symbol: char) -> Nfa {
        let start = self.names.fresh();
        let mut nfa = Nfa::new(start);

        if symbol == EPSILON {
            nfa.add_final(start);
            return nfa;
        }

        let end = self.names.fresh();
        nfa.add_final(end);
        nfa.add_transition(start, Label::Symbol(symbol), end);
        nfa.extend_alphabet([symbol]);
        nfa
    }

    /// `first` then `second`. Keeps the start state and alphabet of `first`.
    pub fn concatenate(&self, mut first: Nfa, second: Nfa) -> Nfa {
        let join = second.start();
        let finals: Vec<StateId> = first.finals().collect();
        for state in finals {
            first.add_transition(state, Label::Epsilon, join);
            first.remove_final(state);
        }

        first.absorb(second);
        first
    }

    /// `first` or `second` through a fresh start state. All finals survive.
    pub fn union(&mut self, mut first: Nfa, second: Nfa) -> Nfa {
        let start = self.names.fresh();
        let left = first.start();
        let right = second.start();

        first.absorb(second);
        first.add_transition(start, Label::Epsilon, left);
        first.add_transition(start, Label::Epsilon, right);
        first.set_start(start);
        first
    }

    /// Kleene star: loop every final back to the start, then prepend a
    /// fresh state that is both start and final.
    pub fn repetition(&mut self, mut fragment: Nfa) -> Nfa {
        let inner = fragment.start();
        let finals: Vec<StateId> = fragment.finals().collect();
        for state in finals {
            fragment.add_transition(state, Label::Epsilon, inner);
        }

        let start = self.names.fresh();
        fragment.add_transition(start, Label::Epsilon, inner);
        fragment.set_start(start);
        fragment.add_final(start);
        fragment
    }
}
