//! Capture-avoiding variable substitutions
//!
//! Terms substitute in a single non-recursive pass per variable leaf: a
//! replacement term is inserted as-is and never re-substituted. Formulas
//! additionally rename quantified variables whenever keeping the binder
//! would capture a variable introduced by the substitution.

use super::atom::Atom;
use super::formula::Formula;
use super::term::{Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A substitution mapping variables to terms
///
/// Variables absent from the map are implicitly mapped to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    map: BTreeMap<Variable, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: BTreeMap::new(),
        }
    }

    /// Create a substitution with a single binding
    pub fn singleton(var: Variable, term: Term) -> Self {
        let mut subst = Substitution::new();
        subst.insert(var, term);
        subst
    }

    /// Add a variable -> term mapping
    pub fn insert(&mut self, var: Variable, term: Term) {
        self.map.insert(var, term);
    }

    /// Remove the binding for a variable
    pub fn remove(&mut self, var: &Variable) -> Option<Term> {
        self.map.remove(var)
    }

    /// Get the term for a variable, if bound
    pub fn get(&self, var: &Variable) -> Option<&Term> {
        self.map.get(var)
    }

    /// Check if a variable is bound
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    /// Check if no variable is bound
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Iterate over the bindings
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Term)> {
        self.map.iter()
    }

    /// Compose two substitutions: applying the result is equivalent to
    /// applying `self` and then `other`.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();
        for (var, term) in &self.map {
            result.insert(var.clone(), term.substitute(other));
        }
        for (var, term) in &other.map {
            if !self.map.contains_key(var) {
                result.insert(var.clone(), term.clone());
            }
        }
        result
    }
}

impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        Substitution {
            map: iter.into_iter().collect(),
        }
    }
}

/// Pick a variant of `seed` not contained in `forbidden`
///
/// A pure function: the seed name is extended with a prime marker until it
/// leaves the forbidden set. Terminates because the forbidden set is finite.
pub fn variant(seed: &Variable, forbidden: &BTreeSet<Variable>) -> Variable {
    let mut candidate = seed.clone();
    while forbidden.contains(&candidate) {
        candidate.name.push('\'');
    }
    candidate
}

impl Term {
    /// Apply a substitution to this term
    pub fn substitute(&self, subst: &Substitution) -> Term {
        match self {
            Term::Var(v) => subst.get(v).cloned().unwrap_or_else(|| self.clone()),
            Term::App(f, args) => {
                let new_args = args.iter().map(|arg| arg.substitute(subst)).collect();
                Term::App(f.clone(), new_args)
            }
        }
    }
}

impl Atom {
    /// Apply a substitution to this atom; the shape is preserved
    pub fn substitute(&self, subst: &Substitution) -> Atom {
        match self {
            Atom::Eq(lhs, rhs) => Atom::Eq(lhs.substitute(subst), rhs.substitute(subst)),
            Atom::Pred(p, args) => Atom::Pred(
                p.clone(),
                args.iter().map(|arg| arg.substitute(subst)).collect(),
            ),
        }
    }
}

impl Formula {
    /// Apply a substitution to the free variables of this formula
    ///
    /// Total over all well-formed formulas. A quantified variable is never
    /// substituted inside its own scope, and the binder is renamed to a
    /// fresh variant whenever a replacement term would otherwise capture it.
    pub fn substitute(&self, subst: &Substitution) -> Formula {
        match self {
            Formula::Truth(b) => Formula::Truth(*b),
            Formula::Atom(a) => Formula::Atom(a.substitute(subst)),
            Formula::Not(f) => Formula::not(f.substitute(subst)),
            Formula::Binary(lhs, op, rhs) => {
                Formula::binary(lhs.substitute(subst), *op, rhs.substitute(subst))
            }
            Formula::Quantified(q, x, body) => {
                substitute_quantified(*q, x, body, subst)
            }
        }
    }
}

/// Substitute under a binder, renaming it if any replacement term for a
/// free variable of the body contains the bound variable.
fn substitute_quantified(
    q: super::formula::Quantifier,
    x: &Variable,
    body: &Formula,
    subst: &Substitution,
) -> Formula {
    // The bound variable is local: it is never replaced inside its scope.
    let mut inner = subst.clone();
    inner.remove(x);

    let capture_possible = body
        .free_variables()
        .iter()
        .filter(|y| *y != x)
        .any(|y| match inner.get(y) {
            Some(replacement) => replacement.variables().contains(x),
            // Unmapped variables replace themselves; y != x, so no capture
            None => false,
        });

    if capture_possible {
        let fresh = variant(x, &body.substitute(&inner).free_variables());
        inner.insert(x.clone(), Term::Var(fresh.clone()));
        Formula::Quantified(q, fresh, Box::new(body.substitute(&inner)))
    } else {
        Formula::Quantified(q, x.clone(), Box::new(body.substitute(&inner)))
    }
}
