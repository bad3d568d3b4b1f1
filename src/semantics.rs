//! Finite-model truth evaluation
//!
//! An [`Interpretation`] fixes a finite domain, a meaning for every
//! interpreted function and predicate symbol, and the equality relation
//! used for equation atoms. Evaluation is exponential in quantifier
//! nesting against the domain size, which is fine for the small
//! illustrative models this evaluator targets.

use crate::error::{FolError, Result};
use crate::fol::{Atom, BinOp, Formula, FunctionSymbol, PredicateSymbol, Quantifier, Term, Variable};
use std::collections::{BTreeMap, HashMap};

/// A finite mapping from variables to domain elements
pub type Assignment<D> = BTreeMap<Variable, D>;

type FunctionMeaning<D> = Box<dyn Fn(&[D]) -> D>;
type PredicateMeaning<D> = Box<dyn Fn(&[D]) -> bool>;
type EqualityRelation<D> = Box<dyn Fn(&D, &D) -> bool>;

/// A finite interpretation of function and predicate symbols
///
/// Meanings are registered per `(symbol, arity)` pair, so a symbol used at
/// several arities gets an independent meaning for each. The equality
/// relation is trusted to be an equivalence relation; that is the
/// interpretation author's obligation, not checked here.
pub struct Interpretation<D> {
    domain: Vec<D>,
    functions: HashMap<(FunctionSymbol, usize), FunctionMeaning<D>>,
    predicates: HashMap<(PredicateSymbol, usize), PredicateMeaning<D>>,
    equality: EqualityRelation<D>,
}

impl<D: Clone> Interpretation<D> {
    /// Create an interpretation over `domain` with structural equality
    pub fn new(domain: Vec<D>) -> Self
    where
        D: PartialEq + 'static,
    {
        Self::with_equality(domain, |a: &D, b: &D| a == b)
    }

    /// Create an interpretation with an explicit equality relation
    pub fn with_equality(domain: Vec<D>, equality: impl Fn(&D, &D) -> bool + 'static) -> Self {
        Interpretation {
            domain,
            functions: HashMap::new(),
            predicates: HashMap::new(),
            equality: Box::new(equality),
        }
    }

    /// Register the meaning of a function symbol at a given arity
    pub fn interpret_function(
        &mut self,
        name: &str,
        arity: usize,
        meaning: impl Fn(&[D]) -> D + 'static,
    ) {
        self.functions
            .insert((FunctionSymbol::new(name), arity), Box::new(meaning));
    }

    /// Register the meaning of a predicate symbol at a given arity
    pub fn interpret_predicate(
        &mut self,
        name: &str,
        arity: usize,
        meaning: impl Fn(&[D]) -> bool + 'static,
    ) {
        self.predicates
            .insert((PredicateSymbol::new(name), arity), Box::new(meaning));
    }

    /// The domain of this interpretation
    pub fn domain(&self) -> &[D] {
        &self.domain
    }

    /// Evaluate a term to a domain element
    ///
    /// Fails on a variable missing from the assignment or a function
    /// symbol with no registered meaning at the observed arity.
    pub fn eval_term(&self, assignment: &Assignment<D>, term: &Term) -> Result<D> {
        match term {
            Term::Var(v) => assignment
                .get(v)
                .cloned()
                .ok_or_else(|| FolError::UndefinedVariable(v.name.clone())),
            Term::App(f, args) => {
                let values = args
                    .iter()
                    .map(|arg| self.eval_term(assignment, arg))
                    .collect::<Result<Vec<_>>>()?;
                let meaning = self
                    .functions
                    .get(&(f.clone(), args.len()))
                    .ok_or_else(|| FolError::UninterpretedFunction(f.name.clone(), args.len()))?;
                Ok(meaning(&values))
            }
        }
    }

    fn eval_atom(&self, assignment: &Assignment<D>, atom: &Atom) -> Result<bool> {
        match atom {
            Atom::Eq(lhs, rhs) => {
                let l = self.eval_term(assignment, lhs)?;
                let r = self.eval_term(assignment, rhs)?;
                Ok((self.equality)(&l, &r))
            }
            Atom::Pred(p, args) => {
                let values = args
                    .iter()
                    .map(|arg| self.eval_term(assignment, arg))
                    .collect::<Result<Vec<_>>>()?;
                let meaning = self
                    .predicates
                    .get(&(p.clone(), args.len()))
                    .ok_or_else(|| FolError::UninterpretedPredicate(p.name.clone(), args.len()))?;
                Ok(meaning(&values))
            }
        }
    }

    /// Evaluate a formula to a truth value
    ///
    /// Quantifiers range over the whole domain: a universal formula is
    /// vacuously true over the empty domain, an existential one false.
    /// Both operands of a connective are always evaluated.
    pub fn holds(&self, assignment: &Assignment<D>, formula: &Formula) -> Result<bool> {
        match formula {
            Formula::Truth(b) => Ok(*b),
            Formula::Atom(a) => self.eval_atom(assignment, a),
            Formula::Not(f) => Ok(!self.holds(assignment, f)?),
            Formula::Binary(lhs, op, rhs) => {
                let l = self.holds(assignment, lhs)?;
                let r = self.holds(assignment, rhs)?;
                Ok(match op {
                    BinOp::And => l && r,
                    BinOp::Or => l || r,
                    BinOp::Imp => !l || r,
                    BinOp::Iff => l == r,
                })
            }
            Formula::Quantified(q, x, body) => {
                let mut result = matches!(q, Quantifier::Forall);
                for element in &self.domain {
                    let mut extended = assignment.clone();
                    extended.insert(x.clone(), element.clone());
                    let value = self.holds(&extended, body)?;
                    match q {
                        Quantifier::Forall => result = result && value,
                        Quantifier::Exists => result = result || value,
                    }
                }
                Ok(result)
            }
        }
    }
}

impl Interpretation<u32> {
    /// Arithmetic modulo `n`: domain `{0, .., n-1}`, constants `0` and `1`,
    /// functions `+` and `*`. Requires `n >= 1`.
    pub fn modulo(n: u32) -> Self {
        let mut interp = Interpretation::new((0..n).collect());
        interp.interpret_function("0", 0, |_| 0);
        interp.interpret_function("1", 0, move |_| 1 % n);
        interp.interpret_function("+", 2, move |args| (args[0] + args[1]) % n);
        interp.interpret_function("*", 2, move |args| (args[0] * args[1]) % n);
        interp
    }
}
