//! First-order logic data structures
//!
//! This module provides the fundamental types for representing FOL
//! formulas: terms, atoms, formulas, and capture-avoiding substitutions.

pub mod atom;
pub mod formula;
pub mod substitution;
pub mod term;


// Re-export commonly used types
pub use atom::{Atom, PredicateSymbol, EQUALITY};
pub use formula::{BinOp, Formula, Quantifier};
pub use substitution::{variant, Substitution};
pub use term::{FunctionSymbol, Term, Variable};
