//! Error types for folcore

use thiserror::Error;

/// Errors raised by the symbolic kernel.
///
/// All of these are modeling errors on the caller's side: building an atom
/// with a reserved predicate name, or evaluating a formula against an
/// interpretation that does not cover its symbols. Structural non-matches
/// (e.g. [`Atom::zip`](crate::fol::Atom::zip)) are `Option`, not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolError {
    #[error("reserved predicate name: {0}")]
    ReservedPredicate(String),

    #[error("undefined variable: {0}")]
    UndefinedVariable(String),

    #[error("uninterpreted function: {0}/{1}")]
    UninterpretedFunction(String, usize),

    #[error("uninterpreted predicate: {0}/{1}")]
    UninterpretedPredicate(String, usize),
}

pub type Result<T> = std::result::Result<T, FolError>;
