//! Text dump of an automaton for inspection and snapshot testing.
//!
//! One line per state, ordered by state name:
//!
//! ```text
//! Σ = {a, b}
//! q0 (start): ε → q1
//! q1: a → q2
//! q2 (final): ∅
//! ```

use std::fmt::{self, Write};

use renfa_core::{Label, Nfa, StateId};

/// Printer for [`Nfa`] with configurable output options.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
    show_alphabet: bool,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            show_alphabet: true,
        }
    }

    /// Include the `Σ = {..}` header line.
    pub fn show_alphabet(mut self, show: bool) -> Self {
        self.show_alphabet = show;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        if self.show_alphabet {
            let symbols: Vec<String> = self.nfa.alphabet().map(String::from).collect();
            writeln!(w, "Σ = {{{}}}", symbols.join(", "))?;
        }

        let mut states: Vec<StateId> = self.nfa.states().collect();
        states.sort();

        for state in states {
            write!(w, "{state}")?;
            self.format_marks(w, state)?;
            w.write_str(": ")?;
            self.format_edges(w, state)?;
            writeln!(w)?;
        }

        Ok(())
    }

    fn format_marks(&self, w: &mut impl Write, state: StateId) -> fmt::Result {
        let is_start = self.nfa.start() == state;
        let is_final = self.nfa.is_final(state);
        match (is_start, is_final) {
            (true, true) => w.write_str(" (start, final)"),
            (true, false) => w.write_str(" (start)"),
            (false, true) => w.write_str(" (final)"),
            (false, false) => Ok(()),
        }
    }

    fn format_edges(&self, w: &mut impl Write, state: StateId) -> fmt::Result {
        let mut edges: Vec<(Label, Vec<StateId>)> = self
            .nfa
            .outgoing(state)
            .map(|(label, targets)| {
                let mut targets: Vec<StateId> = targets.iter().copied().collect();
                targets.sort();
                (label, targets)
            })
            .collect();
        edges.sort_by_key(|(label, _)| *label);

        if edges.is_empty() {
            return w.write_str("∅");
        }

        for (i, (label, targets)) in edges.iter().enumerate() {
            if i > 0 {
                w.write_str("; ")?;
            }
            let targets: Vec<String> = targets.iter().map(StateId::to_string).collect();
            write!(w, "{label} → {}", targets.join(", "))?;
        }

        Ok(())
    }
}

/// Dump `nfa` with default options.
pub fn dump(nfa: &Nfa) -> String {
    NfaPrinter::new(nfa).dump()
}
