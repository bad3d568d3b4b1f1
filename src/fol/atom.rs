//! Atoms: predicate applications and equations

use super::term::{FunctionSymbol, Term, Variable};
use crate::error::{FolError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The distinguished equality predicate name
pub const EQUALITY: &str = "=";

/// Names that must never be used for a plain predicate application
const RESERVED: [&str; 3] = [EQUALITY, "true", "false"];

/// A predicate symbol
///
/// As with [`FunctionSymbol`], arity is the argument count at each
/// occurrence, not a property of the symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PredicateSymbol {
    pub name: String,
}

impl PredicateSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        PredicateSymbol { name: name.into() }
    }
}

/// An atomic formula: an equation between two terms, or a predicate
/// applied to terms
///
/// Build values through [`Atom::equation`] and [`Atom::predicate`]; the
/// latter rejects the reserved names `"="`, `"true"` and `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Atom {
    Eq(Term, Term),
    Pred(PredicateSymbol, Vec<Term>),
}

impl Atom {
    /// Build the equation `lhs = rhs`
    pub fn equation(lhs: Term, rhs: Term) -> Atom {
        Atom::Eq(lhs, rhs)
    }

    /// Build a plain predicate application
    ///
    /// Fails with [`FolError::ReservedPredicate`] if `name` is the equality
    /// symbol or a boolean constant name; equations go through
    /// [`Atom::equation`] instead.
    pub fn predicate(name: impl Into<String>, args: Vec<Term>) -> Result<Atom> {
        let name = name.into();
        if RESERVED.contains(&name.as_str()) {
            return Err(FolError::ReservedPredicate(name));
        }
        Ok(Atom::Pred(PredicateSymbol::new(name), args))
    }

    /// Report whether this atom is an equation
    pub fn is_equation(&self) -> bool {
        matches!(self, Atom::Eq(_, _))
    }

    /// The equality-aware eliminator
    pub fn fold<R>(
        &self,
        on_equation: impl FnOnce(&Term, &Term) -> R,
        on_predicate: impl FnOnce(&PredicateSymbol, &[Term]) -> R,
    ) -> R {
        match self {
            Atom::Eq(lhs, rhs) => on_equation(lhs, rhs),
            Atom::Pred(p, args) => on_predicate(p, args),
        }
    }

    /// The plain-application eliminator
    ///
    /// Views every atom as a predicate application; an equation is seen as
    /// the predicate `"="` applied to its two sides.
    pub fn fold_predicate<R>(&self, on_apply: impl FnOnce(&str, Vec<&Term>) -> R) -> R {
        match self {
            Atom::Eq(lhs, rhs) => on_apply(EQUALITY, vec![lhs, rhs]),
            Atom::Pred(p, args) => on_apply(&p.name, args.iter().collect()),
        }
    }

    /// Pair up the argument terms of two atoms of the same shape
    ///
    /// Returns `None` when the shapes are incompatible: one is an equation
    /// and the other is not, or the predicate symbols or arities differ.
    /// A non-match is expected behavior, never an error.
    pub fn zip<'a>(&'a self, other: &'a Atom) -> Option<Vec<(&'a Term, &'a Term)>> {
        match (self, other) {
            (Atom::Eq(l1, r1), Atom::Eq(l2, r2)) => Some(vec![(l1, l2), (r1, r2)]),
            (Atom::Pred(p1, args1), Atom::Pred(p2, args2)) => {
                if p1 == p2 && args1.len() == args2.len() {
                    Some(args1.iter().zip(args2.iter()).collect())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Iterate over the terms contained in this atom
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        match self {
            Atom::Eq(lhs, rhs) => vec![lhs, rhs].into_iter(),
            Atom::Pred(_, args) => args.iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Collect all variables in this atom
    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        for term in self.terms() {
            term.collect_variables(vars);
        }
    }

    /// Get all variables in this atom
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Collect all `(function, arity)` pairs in this atom
    pub fn collect_functions(&self, funcs: &mut BTreeSet<(FunctionSymbol, usize)>) {
        for term in self.terms() {
            term.collect_functions(funcs);
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Eq(lhs, rhs) => write!(f, "{} = {}", lhs, rhs),
            Atom::Pred(p, args) if args.is_empty() => write!(f, "{}", p.name),
            Atom::Pred(p, args) => {
                write!(f, "{}(", p.name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
