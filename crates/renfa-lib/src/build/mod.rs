//! Thompson fragment construction.
//!
//! Every grammar rule produces a fragment: an [`Nfa`](renfa_core::Nfa) with
//! one start state and any number of final states. Combinators take their
//! operands by value and return the single surviving fragment.
//!
//! ```text
//! primitive(a)      s ─a→ (f)
//! primitive(e)      (s)
//! concatenate(x,y)  x.finals ─ε→ y.start         finals of x demoted
//! union(x,y)        new ─ε→ x.start, y.start      new is the start
//! repetition(x)     x.finals ─ε→ x.start, (new) ─ε→ x.start
//! ```
//!
//! States are only ever added, never removed.

mod fragment;
mod names;


pub use fragment::{BuildOp, FragmentBuilder};
pub use names::NameGenerator;
