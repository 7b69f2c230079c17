//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{EPSILON, Label, Nfa, StateId};

/// A structural rule an [`Nfa`] must satisfy but does not.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("start state {0} is not in the state set")]
    StartNotInStates(StateId),

    #[error("final state {0} is not in the state set")]
    FinalNotInStates(StateId),

    #[error("transition {from} --{label}--> {to} references an unknown state")]
    DanglingTransition {
        from: StateId,
        label: Label,
        to: StateId,
    },

    #[error("alphabet contains the reserved epsilon marker `e`")]
    EpsilonInAlphabet,
}

impl Nfa {
    /// Verify that start, final and transition states all belong to the state
    /// set and that the alphabet excludes the epsilon marker.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.contains(self.start()) {
            return Err(InvariantViolation::StartNotInStates(self.start()));
        }

        if let Some(state) = self.finals().find(|s| !self.contains(*s)) {
            return Err(InvariantViolation::FinalNotInStates(state));
        }

        if let Some(t) = self
            .transitions()
            .find(|t| !self.contains(t.from) || !self.contains(t.to))
        {
            return Err(InvariantViolation::DanglingTransition {
                from: t.from,
                label: t.label,
                to: t.to,
            });
        }

        if self.alphabet().any(|c| c == EPSILON) {
            return Err(InvariantViolation::EpsilonInAlphabet);
        }

        Ok(())
    }
}
