//! folcore: the symbolic kernel of a first-order logic toolkit
//!
//! This library provides the term/atom/formula representation, a
//! capture-avoiding substitution calculus, a finite-model evaluator, and
//! the compilation of built-in equality into ordinary congruence axioms.
//! Parsers, pretty-printing frontends, and proof-search engines are
//! external consumers of these types; they drive the kernel through the
//! fold eliminators and the operations re-exported below.
//!
//! Every value is immutable and every operation is pure: there is no
//! shared mutable state, and fresh-variable generation is a pure function
//! of its seed and forbidden set, so everything here is safe to call
//! concurrently without synchronization.

pub mod equality;
pub mod error;
pub mod fol;
pub mod semantics;

// Re-export commonly used types from fol
pub use fol::{
    variant, Atom, BinOp, Formula, FunctionSymbol, PredicateSymbol, Quantifier, Substitution,
    Term, Variable,
};

pub use equality::{equalitize, function_congruence, predicate_congruence};
pub use error::{FolError, Result};
pub use semantics::{Assignment, Interpretation};
