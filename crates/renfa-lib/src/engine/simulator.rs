//! Subset simulation: track every state the automaton could be in.

use indexmap::IndexSet;

use renfa_core::{Label, Nfa, StateId};

/// Runs input strings against an [`Nfa`] without determinizing it.
pub struct Simulator<'a> {
    nfa: &'a Nfa,
}

impl<'a> Simulator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    /// Every state reachable from `states` through epsilon edges alone,
    /// including `states` themselves.
    pub fn epsilon_closure(&self, states: impl IntoIterator<Item = StateId>) -> IndexSet<StateId> {
        let mut closure: IndexSet<StateId> = states.into_iter().collect();
        let mut stack: Vec<StateId> = closure.iter().copied().collect();

        while let Some(state) = stack.pop() {
            for next in self.nfa.successors(state, Label::Epsilon) {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }

    /// States reachable from `current` by consuming `symbol`, closed over epsilon.
    pub fn step(&self, current: &IndexSet<StateId>, symbol: char) -> IndexSet<StateId> {
        let moved = current
            .iter()
            .flat_map(|&state| self.nfa.successors(state, Label::Symbol(symbol)));
        self.epsilon_closure(moved)
    }

    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.epsilon_closure([self.nfa.start()]);

        for c in input.chars() {
            current = self.step(&current, c);
            if current.is_empty() {
                return false;
            }
        }

        current.iter().any(|&state| self.nfa.is_final(state))
    }
}
