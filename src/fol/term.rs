//! Terms in first-order logic

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A variable in first-order logic
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A function symbol
///
/// Arity is not part of the symbol: it is the argument-list length at each
/// occurrence, and the same name may occur at different arities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionSymbol {
    pub name: String,
}

impl FunctionSymbol {
    pub fn new(name: impl Into<String>) -> Self {
        FunctionSymbol { name: name.into() }
    }
}

/// A term in first-order logic
///
/// A zero-argument application denotes a constant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Var(Variable),
    App(FunctionSymbol, Vec<Term>),
}

impl Term {
    /// Build a variable term
    pub fn var(name: impl Into<String>) -> Term {
        Term::Var(Variable::new(name))
    }

    /// Build a function application
    pub fn app(name: impl Into<String>, args: Vec<Term>) -> Term {
        Term::App(FunctionSymbol::new(name), args)
    }

    /// Build a constant (zero-argument application)
    pub fn constant(name: impl Into<String>) -> Term {
        Term::app(name, vec![])
    }

    /// The single eliminator for terms
    ///
    /// Applies itself to the arguments of an application first and hands the
    /// results to `on_app` together with the function symbol.
    pub fn fold<R>(
        &self,
        on_var: &impl Fn(&Variable) -> R,
        on_app: &impl Fn(&FunctionSymbol, Vec<R>) -> R,
    ) -> R {
        match self {
            Term::Var(v) => on_var(v),
            Term::App(f, args) => {
                let results = args.iter().map(|arg| arg.fold(on_var, on_app)).collect();
                on_app(f, results)
            }
        }
    }

    /// Check whether this term contains no variables
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Var(_) => false,
            Term::App(_, args) => args.iter().all(Term::is_ground),
        }
    }

    /// Get all variables in this term
    pub fn variables(&self) -> BTreeSet<Variable> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    /// Collect all variables in this term
    pub fn collect_variables(&self, vars: &mut BTreeSet<Variable>) {
        match self {
            Term::Var(v) => {
                vars.insert(v.clone());
            }
            Term::App(_, args) => {
                for arg in args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// Get all `(function, arity)` pairs occurring in this term
    ///
    /// Arity is the argument count at each occurrence; repeated occurrences
    /// collapse into the set.
    pub fn functions(&self) -> BTreeSet<(FunctionSymbol, usize)> {
        let mut funcs = BTreeSet::new();
        self.collect_functions(&mut funcs);
        funcs
    }

    /// Collect all `(function, arity)` pairs in this term
    pub fn collect_functions(&self, funcs: &mut BTreeSet<(FunctionSymbol, usize)>) {
        if let Term::App(f, args) = self {
            funcs.insert((f.clone(), args.len()));
            for arg in args {
                arg.collect_functions(funcs);
            }
        }
    }
}

// Display implementations for pretty printing

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for FunctionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{}", v),
            Term::App(func, args) if args.is_empty() => write!(f, "{}", func),
            Term::App(func, args) => {
                write!(f, "{}(", func)?;
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
