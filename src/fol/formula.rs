//! First-order formulas: boolean connectives and quantifiers over atoms

use super::atom::{Atom, PredicateSymbol};
use super::term::{FunctionSymbol, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Binary connective
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BinOp {
    And,
    Or,
    Imp,
    Iff,
}

impl BinOp {
    /// Binding strength for pretty-printing; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Iff => 1,
            BinOp::Imp => 2,
            BinOp::Or => 3,
            BinOp::And => 4,
        }
    }

    /// Concrete-syntax symbol
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "&",
            BinOp::Or => "|",
            BinOp::Imp => "==>",
            BinOp::Iff => "<=>",
        }
    }
}

/// Quantifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Quantifier {
    /// Concrete-syntax keyword
    pub fn symbol(self) -> &'static str {
        match self {
            Quantifier::Forall => "forall",
            Quantifier::Exists => "exists",
        }
    }
}

/// A first-order formula
///
/// Each quantifier node binds exactly one variable, shadowing any outer
/// binding of the same name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Formula {
    Truth(bool),
    Atom(Atom),
    Not(Box<Formula>),
    Binary(Box<Formula>, BinOp, Box<Formula>),
    Quantified(Quantifier, Variable, Box<Formula>),
}

impl Formula {
    /// Build a truth constant
    pub fn truth(value: bool) -> Formula {
        Formula::Truth(value)
    }

    /// Build an atomic formula
    pub fn atom(atom: Atom) -> Formula {
        Formula::Atom(atom)
    }

    /// Build a negation
    pub fn not(f: Formula) -> Formula {
        Formula::Not(Box::new(f))
    }

    /// Build a binary connective
    pub fn binary(lhs: Formula, op: BinOp, rhs: Formula) -> Formula {
        Formula::Binary(Box::new(lhs), op, Box::new(rhs))
    }

    /// Build a conjunction
    pub fn and(lhs: Formula, rhs: Formula) -> Formula {
        Formula::binary(lhs, BinOp::And, rhs)
    }

    /// Build a disjunction
    pub fn or(lhs: Formula, rhs: Formula) -> Formula {
        Formula::binary(lhs, BinOp::Or, rhs)
    }

    /// Build an implication
    pub fn imp(lhs: Formula, rhs: Formula) -> Formula {
        Formula::binary(lhs, BinOp::Imp, rhs)
    }

    /// Build a biconditional
    pub fn iff(lhs: Formula, rhs: Formula) -> Formula {
        Formula::binary(lhs, BinOp::Iff, rhs)
    }

    /// Build a universally quantified formula
    pub fn forall(var: Variable, body: Formula) -> Formula {
        Formula::Quantified(Quantifier::Forall, var, Box::new(body))
    }

    /// Build an existentially quantified formula
    pub fn exists(var: Variable, body: Formula) -> Formula {
        Formula::Quantified(Quantifier::Exists, var, Box::new(body))
    }

    /// The single eliminator for formulas
    ///
    /// A catamorphism: subformula results are computed first and handed to
    /// the matching handler. Every structural algorithm over formulas goes
    /// through this or through exhaustive pattern matching, so adding a
    /// variant forces every consumer to be revisited.
    pub fn fold<R>(
        &self,
        on_truth: &impl Fn(bool) -> R,
        on_atom: &impl Fn(&Atom) -> R,
        on_not: &impl Fn(R) -> R,
        on_binary: &impl Fn(R, BinOp, R) -> R,
        on_quantified: &impl Fn(Quantifier, &Variable, R) -> R,
    ) -> R {
        match self {
            Formula::Truth(b) => on_truth(*b),
            Formula::Atom(a) => on_atom(a),
            Formula::Not(f) => {
                let inner = f.fold(on_truth, on_atom, on_not, on_binary, on_quantified);
                on_not(inner)
            }
            Formula::Binary(lhs, op, rhs) => {
                let l = lhs.fold(on_truth, on_atom, on_not, on_binary, on_quantified);
                let r = rhs.fold(on_truth, on_atom, on_not, on_binary, on_quantified);
                on_binary(l, *op, r)
            }
            Formula::Quantified(q, var, body) => {
                let b = body.fold(on_truth, on_atom, on_not, on_binary, on_quantified);
                on_quantified(*q, var, b)
            }
        }
    }

    /// Get all free variables in the formula
    ///
    /// A quantifier removes its bound variable from the free variables of
    /// its body.
    pub fn free_variables(&self) -> BTreeSet<Variable> {
        self.fold(
            &|_| BTreeSet::new(),
            &|atom| atom.variables(),
            &|vars| vars,
            &|mut lhs, _, rhs| {
                lhs.extend(rhs);
                lhs
            },
            &|_, var, mut vars| {
                vars.remove(var);
                vars
            },
        )
    }

    /// Check if the formula is closed (no free variables)
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    /// Universally quantify over every free variable
    ///
    /// Binders are introduced in lexicographic order of the variable names,
    /// outermost first, so output is reproducible.
    pub fn generalize(self) -> Formula {
        let free: Vec<Variable> = self.free_variables().into_iter().collect();
        free.into_iter()
            .rev()
            .fold(self, |body, var| Formula::forall(var, body))
    }

    /// Get all `(function, arity)` pairs occurring anywhere in the formula
    pub fn functions(&self) -> BTreeSet<(FunctionSymbol, usize)> {
        self.fold(
            &|_| BTreeSet::new(),
            &|atom| {
                let mut funcs = BTreeSet::new();
                atom.collect_functions(&mut funcs);
                funcs
            },
            &|funcs| funcs,
            &|mut lhs, _, rhs| {
                lhs.extend(rhs);
                lhs
            },
            &|_, _, funcs| funcs,
        )
    }

    /// Get all `(predicate, arity)` pairs from plain predicate applications
    ///
    /// Equations do not contribute; the equality symbol is not an ordinary
    /// predicate.
    pub fn predicates(&self) -> BTreeSet<(PredicateSymbol, usize)> {
        self.fold(
            &|_| BTreeSet::new(),
            &|atom| {
                let mut preds = BTreeSet::new();
                if let Atom::Pred(p, args) = atom {
                    preds.insert((p.clone(), args.len()));
                }
                preds
            },
            &|preds| preds,
            &|mut lhs, _, rhs| {
                lhs.extend(rhs);
                lhs
            },
            &|_, _, preds| preds,
        )
    }

    /// Get the set of atoms occurring anywhere in the formula
    pub fn atoms(&self) -> BTreeSet<Atom> {
        self.fold(
            &|_| BTreeSet::new(),
            &|atom| {
                let mut set = BTreeSet::new();
                set.insert(atom.clone());
                set
            },
            &|set| set,
            &|mut lhs, _, rhs| {
                lhs.extend(rhs);
                lhs
            },
            &|_, _, set| set,
        )
    }

    /// Print with minimal parentheses; `prec` is the binding strength of
    /// the surrounding context.
    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, prec: u8) -> fmt::Result {
        match self {
            Formula::Truth(true) => write!(f, "true"),
            Formula::Truth(false) => write!(f, "false"),
            Formula::Atom(a) => write!(f, "{}", a),
            Formula::Not(inner) => {
                write!(f, "~")?;
                inner.fmt_prec(f, 6)
            }
            Formula::Binary(lhs, op, rhs) => {
                let p = op.precedence();
                if prec > p {
                    write!(f, "(")?;
                }
                // And/Or chains associate left, Imp/Iff right
                let (lp, rp) = match op {
                    BinOp::And | BinOp::Or => (p, p + 1),
                    BinOp::Imp | BinOp::Iff => (p + 1, p),
                };
                lhs.fmt_prec(f, lp)?;
                write!(f, " {} ", op.symbol())?;
                rhs.fmt_prec(f, rp)?;
                if prec > p {
                    write!(f, ")")?;
                }
                Ok(())
            }
            Formula::Quantified(q, var, body) => {
                if prec > 0 {
                    write!(f, "(")?;
                }
                write!(f, "{} {}. ", q.symbol(), var)?;
                body.fmt_prec(f, 0)?;
                if prec > 0 {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fol::Term;

    fn p(name: &str, args: Vec<Term>) -> Formula {
        Formula::Atom(Atom::predicate(name, args).unwrap())
    }

    #[test]
    fn test_free_variables_shadowing() {
        // forall X. P(X, Y) — X is bound, Y is free
        let fm = Formula::forall(
            Variable::new("X"),
            p("P", vec![Term::var("X"), Term::var("Y")]),
        );
        let free = fm.free_variables();
        assert_eq!(free.len(), 1);
        assert!(free.contains(&Variable::new("Y")));
    }

    #[test]
    fn test_inner_binder_shadows_outer() {
        // forall X. (P(X) & forall X. Q(X)) has no free variables
        let fm = Formula::forall(
            Variable::new("X"),
            Formula::and(
                p("P", vec![Term::var("X")]),
                Formula::forall(Variable::new("X"), p("Q", vec![Term::var("X")])),
            ),
        );
        assert!(fm.is_closed());
    }

    #[test]
    fn test_generalize_lexicographic() {
        let fm = p("P", vec![Term::var("b"), Term::var("a")]);
        let closed = fm.generalize();
        assert!(closed.is_closed());
        assert_eq!(closed.to_string(), "forall a. forall b. P(b,a)");
    }

    #[test]
    fn test_generalize_closed_is_noop() {
        let fm = p("P", vec![Term::constant("c")]);
        assert_eq!(fm.clone().generalize(), fm);
    }

    #[test]
    fn test_functions_from_formula() {
        let fm = Formula::and(
            p("P", vec![Term::app("f", vec![Term::var("X")])]),
            Formula::Atom(Atom::equation(Term::constant("a"), Term::var("Y"))),
        );
        let funcs = fm.functions();
        assert!(funcs.contains(&(FunctionSymbol::new("f"), 1)));
        assert!(funcs.contains(&(FunctionSymbol::new("a"), 0)));
        assert_eq!(funcs.len(), 2);
    }

    #[test]
    fn test_predicates_exclude_equality() {
        let fm = Formula::and(
            p("P", vec![Term::var("X")]),
            Formula::Atom(Atom::equation(Term::var("X"), Term::var("Y"))),
        );
        let preds = fm.predicates();
        assert_eq!(preds.len(), 1);
        assert!(preds.contains(&(PredicateSymbol::new("P"), 1)));
    }

    #[test]
    fn test_atoms_deduplicate() {
        let q = p("Q", vec![]);
        let fm = Formula::and(q.clone(), Formula::or(q.clone(), p("R", vec![])));
        assert_eq!(fm.atoms().len(), 2);
    }

    #[test]
    fn test_fold_counts_connectives() {
        let fm = Formula::imp(
            Formula::and(p("P", vec![]), p("Q", vec![])),
            Formula::not(p("R", vec![])),
        );
        let count = fm.fold(
            &|_| 0usize,
            &|_| 0,
            &|n| n + 1,
            &|l, _, r| l + r + 1,
            &|_, _, n| n,
        );
        assert_eq!(count, 3);
    }

    #[test]
    fn test_display_precedence() {
        let fm = Formula::imp(
            Formula::and(p("P", vec![]), p("Q", vec![])),
            Formula::or(p("R", vec![]), Formula::not(p("P", vec![]))),
        );
        assert_eq!(fm.to_string(), "P & Q ==> R | ~P");

        let nested = Formula::and(p("P", vec![]), Formula::or(p("Q", vec![]), p("R", vec![])));
        assert_eq!(nested.to_string(), "P & (Q | R)");
    }

    #[test]
    fn test_display_quantifier_parenthesized_in_connective() {
        let fm = Formula::and(
            Formula::forall(Variable::new("X"), p("P", vec![Term::var("X")])),
            p("Q", vec![]),
        );
        assert_eq!(fm.to_string(), "(forall X. P(X)) & Q");
    }

    #[test]
    fn test_serde_round_trip() {
        let fm = Formula::forall(
            Variable::new("X"),
            Formula::iff(
                p("P", vec![Term::var("X")]),
                Formula::Atom(Atom::equation(Term::var("X"), Term::constant("a"))),
            ),
        );
        let json = serde_json::to_string(&fm).unwrap();
        let back: Formula = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fm);
    }

    #[test]
    fn test_display_truth() {
        assert_eq!(Formula::truth(true).to_string(), "true");
        assert_eq!(Formula::not(Formula::truth(false)).to_string(), "~false");
    }
}
