#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core automaton container for renfa.
//!
//! An [`Nfa`] owns a set of named states, exactly one start state, a set of
//! final states, a labelled transition relation and an alphabet. The parser
//! builds fragments as plain `Nfa` values and merges them by moving one into
//! another with [`Nfa::absorb`].
//!
//! Collections keep insertion order (`IndexSet`/`IndexMap`) so dumps and
//! serialized output are stable across runs.

use std::collections::BTreeSet;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::ser::{Serialize, SerializeStruct, Serializer};

mod invariants;

#[cfg(test)]
mod lib_tests;

pub use invariants::InvariantViolation;

/// Reserved character for the empty-string literal. Never an input symbol.
pub const EPSILON: char = 'e';

/// Input symbols every automaton is defined over.
pub const ALPHABET: [char; 2] = ['a', 'b'];

/// Returns true if `c` is an input symbol (not a metacharacter, not epsilon).
pub fn is_symbol(c: char) -> bool {
    ALPHABET.contains(&c)
}

// ============================================================================
// States and labels
// ============================================================================

/// Unique state name within one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl Serialize for StateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What a transition consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Taken without consuming input.
    Epsilon,
    /// Consumes exactly this symbol.
    Symbol(char),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Epsilon => f.write_str("ε"),
            Label::Symbol(c) => write!(f, "{c}"),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One edge of the transition relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    pub from: StateId,
    pub label: Label,
    pub to: StateId,
}

// ============================================================================
// Automaton
// ============================================================================

type Edges = IndexMap<Label, IndexSet<StateId>>;

/// Nondeterministic finite automaton, also used for partially built fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    start: StateId,
    states: IndexSet<StateId>,
    finals: IndexSet<StateId>,
    transitions: IndexMap<StateId, Edges>,
    alphabet: BTreeSet<char>,
}

impl Nfa {
    /// Automaton with a single non-final state that is also the start.
    pub fn new(start: StateId) -> Self {
        let mut states = IndexSet::new();
        states.insert(start);
        Self {
            start,
            states,
            finals: IndexSet::new(),
            transitions: IndexMap::new(),
            alphabet: BTreeSet::new(),
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// Make `state` the start state, adding it to the state set if needed.
    pub fn set_start(&mut self, state: StateId) {
        self.add_state(state);
        self.start = state;
    }

    /// Returns false if the state was already present.
    pub fn add_state(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// States in insertion order.
    pub fn states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Mark `state` final, adding it to the state set if needed.
    pub fn add_final(&mut self, state: StateId) {
        self.add_state(state);
        self.finals.insert(state);
    }

    /// Demote `state` to non-final. Returns false if it was not final.
    pub fn remove_final(&mut self, state: StateId) -> bool {
        self.finals.shift_remove(&state)
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.finals.contains(&state)
    }

    pub fn finals(&self) -> impl Iterator<Item = StateId> + '_ {
        self.finals.iter().copied()
    }

    /// Add `from --label--> to`. Both endpoints join the state set.
    pub fn add_transition(&mut self, from: StateId, label: Label, to: StateId) {
        self.add_state(from);
        self.add_state(to);
        self.transitions
            .entry(from)
            .or_default()
            .entry(label)
            .or_default()
            .insert(to);
    }

    /// Destinations of `from` on `label`.
    pub fn successors(&self, from: StateId, label: Label) -> impl Iterator<Item = StateId> + '_ {
        self.transitions
            .get(&from)
            .and_then(|edges| edges.get(&label))
            .into_iter()
            .flatten()
            .copied()
    }

    /// Outgoing edges of `from`, grouped by label.
    pub fn outgoing(&self, from: StateId) -> impl Iterator<Item = (Label, &IndexSet<StateId>)> {
        self.transitions
            .get(&from)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(label, targets)| (*label, targets)))
    }

    /// Every edge, grouped by source state in insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = Transition> + '_ {
        self.transitions.iter().flat_map(|(from, edges)| {
            edges.iter().flat_map(move |(label, targets)| {
                targets.iter().map(move |to| Transition {
                    from: *from,
                    label: *label,
                    to: *to,
                })
            })
        })
    }

    pub fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|edges| edges.values())
            .map(IndexSet::len)
            .sum()
    }

    /// Move every state, final flag and transition of `other` into `self`.
    ///
    /// The start state and alphabet of `self` are left untouched; callers
    /// decide how the absorbed start state is reached.
    pub fn absorb(&mut self, other: Nfa) {
        let Nfa {
            states,
            finals,
            transitions,
            ..
        } = other;

        self.states.extend(states);
        self.finals.extend(finals);
        for (from, edges) in transitions {
            let own = self.transitions.entry(from).or_default();
            for (label, targets) in edges {
                own.entry(label).or_default().extend(targets);
            }
        }
    }

    /// Sorted input symbols.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    /// Union `symbols` into the alphabet. The epsilon marker is never added.
    pub fn extend_alphabet(&mut self, symbols: impl IntoIterator<Item = char>) {
        self.alphabet
            .extend(symbols.into_iter().filter(|&c| c != EPSILON));
    }
}

impl Serialize for Nfa {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let transitions: Vec<Transition> = self.transitions().collect();

        let mut s = serializer.serialize_struct("Nfa", 5)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("states", &self.states)?;
        s.serialize_field("finals", &self.finals)?;
        s.serialize_field("alphabet", &self.alphabet)?;
        s.serialize_field("transitions", &transitions)?;
        s.end()
    }
}
