//! Acceptance checking for finished automata.

mod simulator;


pub use simulator::Simulator;
