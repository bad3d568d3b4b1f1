//! Golden-output tests for the equality axiom compiler

use folcore::{
    equalitize, function_congruence, predicate_congruence, Atom, BinOp, Formula, FunctionSymbol,
    PredicateSymbol, Term, Variable,
};

fn eq(lhs: Term, rhs: Term) -> Formula {
    Formula::Atom(Atom::equation(lhs, rhs))
}

#[test]
fn congruence_for_ternary_function() {
    let axiom = function_congruence(&FunctionSymbol::new("f"), 3).unwrap();
    assert_eq!(
        axiom.to_string(),
        "forall x1. forall x2. forall x3. forall y1. forall y2. forall y3. \
         x1 = y1 & x2 = y2 & x3 = y3 ==> f(x1,x2,x3) = f(y1,y2,y3)"
    );
}

#[test]
fn congruence_for_binary_plus() {
    let axiom = function_congruence(&FunctionSymbol::new("+"), 2).unwrap();
    assert_eq!(
        axiom.to_string(),
        "forall x1. forall x2. forall y1. forall y2. \
         x1 = y1 & x2 = y2 ==> +(x1,x2) = +(y1,y2)"
    );
}

#[test]
fn no_axiom_for_constants() {
    assert_eq!(function_congruence(&FunctionSymbol::new("c"), 0), None);
    assert_eq!(predicate_congruence(&PredicateSymbol::new("P"), 0), None);
}

#[test]
fn equalitize_without_equality_is_exact_identity() {
    let fm = Formula::imp(
        Formula::Atom(Atom::predicate("P", vec![Term::var("x")]).unwrap()),
        Formula::exists(
            Variable::new("y"),
            Formula::Atom(Atom::predicate("Q", vec![Term::var("x"), Term::var("y")]).unwrap()),
        ),
    );
    assert_eq!(equalitize(fm.clone()), fm);
}

#[test]
fn equalitize_full_output() {
    // forall x. f(x) = x
    let fm = Formula::forall(
        Variable::new("x"),
        eq(Term::app("f", vec![Term::var("x")]), Term::var("x")),
    );
    assert_eq!(
        equalitize(fm).to_string(),
        "(forall x. x = x) & \
         (forall x. forall y. forall z. x = y & x = z ==> y = z) & \
         (forall x1. forall y1. x1 = y1 ==> f(x1) = f(y1)) ==> \
         (forall x. f(x) = x)"
    );
}

#[test]
fn equalitize_covers_predicates_one_directionally() {
    // x = y & P(x) should need the replaceability axiom for P
    let fm = Formula::and(
        eq(Term::var("x"), Term::var("y")),
        Formula::Atom(Atom::predicate("P", vec![Term::var("x")]).unwrap()),
    );
    let result = equalitize(fm.clone());

    let Formula::Binary(axioms, BinOp::Imp, conclusion) = result else {
        panic!("expected a guarded implication");
    };
    assert_eq!(*conclusion, fm);
    let rendered = axioms.to_string();
    assert!(rendered.contains("x1 = y1 ==> P(x1) ==> P(y1)"));
    // One direction only
    assert!(!rendered.contains("<=>"));
}

#[test]
fn equalitize_orders_axioms_by_symbol() {
    // Functions g and f both occur; their axioms appear sorted: f before g
    let fm = eq(
        Term::app("g", vec![Term::var("x")]),
        Term::app("f", vec![Term::var("x")]),
    );
    let rendered = equalitize(fm).to_string();
    let f_pos = rendered.find("f(x1) = f(y1)").unwrap();
    let g_pos = rendered.find("g(x1) = g(y1)").unwrap();
    assert!(f_pos < g_pos);
}

#[test]
fn equalitize_ignores_zero_arity_symbols() {
    // Constants appear in the formula but produce no congruence axiom
    let fm = eq(Term::constant("a"), Term::constant("b"));
    let rendered = equalitize(fm).to_string();
    // No congruence variables means no congruence axioms
    assert!(!rendered.contains("x1"), "unexpected congruence axiom: {}", rendered);
    assert!(rendered.contains("forall x. x = x"));
}
