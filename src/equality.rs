//! Compiling equality into explicit axioms
//!
//! [`equalitize`] lets an equality-oblivious proof engine handle formulas
//! that use built-in equality: the formula is guarded by reflexivity, a
//! combined symmetry-transitivity axiom, and one congruence axiom per
//! function and predicate symbol observed in it.

use crate::fol::{Atom, Formula, FunctionSymbol, PredicateSymbol, Term, Variable};

fn equal(lhs: Term, rhs: Term) -> Formula {
    Formula::Atom(Atom::equation(lhs, rhs))
}

/// Universally close `body` over `vars`, first variable outermost
fn close_over(vars: impl IntoIterator<Item = Variable>, body: Formula) -> Formula {
    let vars: Vec<Variable> = vars.into_iter().collect();
    vars.into_iter()
        .rev()
        .fold(body, |fm, var| Formula::forall(var, fm))
}

fn argument_variables(arity: usize) -> (Vec<Variable>, Vec<Variable>) {
    let xs = (1..=arity)
        .map(|i| Variable::new(format!("x{}", i)))
        .collect();
    let ys = (1..=arity)
        .map(|i| Variable::new(format!("y{}", i)))
        .collect();
    (xs, ys)
}

/// Conjoin the pairwise equalities `x1 = y1 & .. & xn = yn`
///
/// A left fold, so a single pair needs no conjunction. `None` at arity 0.
fn pairwise_equalities(xs: &[Variable], ys: &[Variable]) -> Option<Formula> {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| equal(Term::Var(x.clone()), Term::Var(y.clone())))
        .reduce(Formula::and)
}

/// The congruence axiom for a function symbol at a given arity
///
/// `forall x1..xn y1..yn. x1 = y1 & .. & xn = yn ==> f(x1..xn) = f(y1..yn)`.
/// Arity 0 yields no axiom: constants are congruent via reflexivity.
pub fn function_congruence(f: &FunctionSymbol, arity: usize) -> Option<Formula> {
    let (xs, ys) = argument_variables(arity);
    let antecedent = pairwise_equalities(&xs, &ys)?;
    let apply = |vars: &[Variable]| {
        Term::App(
            f.clone(),
            vars.iter().map(|v| Term::Var(v.clone())).collect(),
        )
    };
    let conclusion = equal(apply(&xs), apply(&ys));
    Some(close_over(
        xs.into_iter().chain(ys),
        Formula::imp(antecedent, conclusion),
    ))
}

/// The one-directional congruence axiom for a predicate symbol
///
/// `forall x1..xn y1..yn. x1 = y1 & .. & xn = yn ==> (P(x1..xn) ==> P(y1..yn))`
/// — a replaceability implication, not a biconditional. Arity 0 yields no
/// axiom.
pub fn predicate_congruence(p: &PredicateSymbol, arity: usize) -> Option<Formula> {
    let (xs, ys) = argument_variables(arity);
    let antecedent = pairwise_equalities(&xs, &ys)?;
    let apply = |vars: &[Variable]| {
        Formula::Atom(Atom::Pred(
            p.clone(),
            vars.iter().map(|v| Term::Var(v.clone())).collect(),
        ))
    };
    let conclusion = Formula::imp(apply(&xs), apply(&ys));
    Some(close_over(
        xs.into_iter().chain(ys),
        Formula::imp(antecedent, conclusion),
    ))
}

/// Reflexivity and a combined symmetry-transitivity axiom
///
/// `forall x y z. x = y & x = z ==> y = z` together with reflexivity
/// entails both symmetry (instantiate y := x) and transitivity, so two
/// axioms suffice.
fn equivalence_axioms() -> Vec<Formula> {
    let x = || Term::var("x");
    let y = || Term::var("y");
    let z = || Term::var("z");

    let reflexivity = Formula::forall(Variable::new("x"), equal(x(), x()));
    let sym_trans = close_over(
        [Variable::new("x"), Variable::new("y"), Variable::new("z")],
        Formula::imp(
            Formula::and(equal(x(), y()), equal(x(), z())),
            equal(y(), z()),
        ),
    );
    vec![reflexivity, sym_trans]
}

/// Rewrite a formula using equality into an equality-free implication
///
/// Returns the input unchanged when it contains no equality atoms.
/// Otherwise the result is `axioms ==> formula`, where the axioms are the
/// equivalence axioms followed by one congruence axiom per `(function,
/// arity)` pair observed anywhere in the formula and per non-equality
/// `(predicate, arity)` pair, each at arity above zero. Axioms are
/// conjoined in sorted symbol order, so output is reproducible.
///
/// Axiom variables are freshly quantified inside each axiom and never
/// interact with variables free in the formula.
pub fn equalitize(formula: Formula) -> Formula {
    if !formula.atoms().iter().any(Atom::is_equation) {
        return formula;
    }

    let mut axioms = equivalence_axioms();
    for (f, arity) in formula.functions() {
        axioms.extend(function_congruence(&f, arity));
    }
    for (p, arity) in formula.predicates() {
        axioms.extend(predicate_congruence(&p, arity));
    }

    match axioms.into_iter().reduce(Formula::and) {
        Some(combined) => Formula::imp(combined, formula),
        None => formula,
    }
}
