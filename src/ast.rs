//! Boolean expression trees.
//!
//! Expressions are built with constructors or with the usual operators:
//!
//! ```rust
//! use oracle_check::ast::Expr;
//!
//! let [q0, q1, q2] = Expr::vars();
//! let f = (q0.clone() | !q1.clone()) & (q0 | q2);
//! assert_eq!(f.to_string(), "(q0 | !q1) & (q0 | q2)");
//! assert_eq!(f.arity(), 3);
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::assignment::Assignment;
use crate::function::BooleanFunction;
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Const(bool),
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Xor(Box<Expr>, Box<Expr>),
}

// Constructors
impl Expr {
    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn var(index: u32) -> Self {
        Expr::Var(Var::new(index))
    }

    /// The first `N` variables `q0 .. q_{N-1}`.
    pub fn vars<const N: usize>() -> [Self; N] {
        std::array::from_fn(|i| Expr::var(i as u32))
    }

    pub fn not(value: Self) -> Self {
        match value {
            Expr::Const(b) => Expr::Const(!b),
            Expr::Not(inner) => *inner,
            _ => Expr::Not(Box::new(value)),
        }
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    /// Conjunction of all `exprs`; `true` when empty.
    pub fn and_all(exprs: impl IntoIterator<Item = Self>) -> Self {
        exprs.into_iter().reduce(Expr::and).unwrap_or(Expr::Const(true))
    }

    /// Disjunction of all `exprs`; `false` when empty.
    pub fn or_all(exprs: impl IntoIterator<Item = Self>) -> Self {
        exprs.into_iter().reduce(Expr::or).unwrap_or(Expr::Const(false))
    }
}

impl Expr {
    /// Evaluates the expression at the given point.
    ///
    /// # Panics
    ///
    /// Panics if the expression mentions a variable outside `input`.
    pub fn eval(&self, input: &Assignment) -> bool {
        match self {
            Expr::Const(b) => *b,
            Expr::Var(v) => input.get(*v),
            Expr::Not(a) => !a.eval(input),
            Expr::And(a, b) => a.eval(input) && b.eval(input),
            Expr::Or(a, b) => a.eval(input) || b.eval(input),
            Expr::Xor(a, b) => a.eval(input) ^ b.eval(input),
        }
    }

    /// Smallest arity covering every variable in the expression.
    pub fn arity(&self) -> u32 {
        match self {
            Expr::Const(_) => 0,
            Expr::Var(v) => v.index() + 1,
            Expr::Not(a) => a.arity(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => a.arity().max(b.arity()),
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Not(a) => 1 + a.size(),
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => 1 + a.size() + b.size(),
        }
    }

    /// Views the expression as a function of `arity` inputs.
    ///
    /// # Panics
    ///
    /// Panics if the expression needs more than `arity` inputs.
    pub fn with_arity(&self, arity: u32) -> Bound<'_> {
        assert!(
            self.arity() <= arity,
            "Expression needs {} inputs, got {}",
            self.arity(),
            arity
        );
        Bound { expr: self, arity }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Or(..) => 1,
            Expr::Xor(..) => 2,
            Expr::And(..) => 3,
            Expr::Not(_) | Expr::Var(_) | Expr::Const(_) => 4,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parent: u8) -> fmt::Result {
        if self.precedence() < parent {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = self.precedence();
        match self {
            Expr::Const(b) => write!(f, "{}", *b as u8),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(a) => {
                write!(f, "!")?;
                a.fmt_operand(f, prec)
            }
            Expr::And(a, b) | Expr::Or(a, b) | Expr::Xor(a, b) => {
                let op = match self {
                    Expr::And(..) => "&",
                    Expr::Or(..) => "|",
                    _ => "^",
                };
                a.fmt_operand(f, prec)?;
                write!(f, " {} ", op)?;
                b.fmt_operand(f, prec)
            }
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        Expr::not(self)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Self) -> Self::Output {
        Expr::and(self, rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Self) -> Self::Output {
        Expr::or(self, rhs)
    }
}

impl BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Expr::xor(self, rhs)
    }
}

/// An expression viewed as a function of a fixed number of inputs.
#[derive(Debug, Copy, Clone)]
pub struct Bound<'a> {
    expr: &'a Expr,
    arity: u32,
}

impl Bound<'_> {
    pub fn expr(&self) -> &Expr {
        self.expr
    }
}

impl BooleanFunction for Bound<'_> {
    fn arity(&self) -> u32 {
        self.arity
    }

    fn eval(&self, input: &Assignment) -> bool {
        self.expr.eval(input)
    }
}

/// Uses the smallest arity covering the expression's variables.
impl BooleanFunction for Expr {
    fn arity(&self) -> u32 {
        Expr::arity(self)
    }

    fn eval(&self, input: &Assignment) -> bool {
        Expr::eval(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::equivalence::check_equivalence;

    use test_log::test;

    #[test]
    fn test_eval() {
        let [q0, q1] = Expr::vars();
        let f = q0 & !q1;
        assert!(f.eval(&Assignment::from_values(&[true, false])));
        assert!(!f.eval(&Assignment::from_values(&[true, true])));
        assert!(!f.eval(&Assignment::from_values(&[false, false])));
    }

    #[test]
    fn test_not_simplifies() {
        let q0 = Expr::var(0);
        assert_eq!(!!q0.clone(), q0);
        assert_eq!(!Expr::constant(true), Expr::constant(false));
    }

    #[test]
    fn test_arity_and_size() {
        let [q0, _, q2] = Expr::vars();
        let f = q0 ^ !q2;
        assert_eq!(f.arity(), 3);
        assert_eq!(f.size(), 4);
        assert_eq!(Expr::constant(true).arity(), 0);
    }

    #[test]
    fn test_display_parenthesizes_by_precedence() {
        let [q0, q1, q2] = Expr::vars();
        let f = (q0.clone() | q1.clone()) & q2.clone();
        assert_eq!(f.to_string(), "(q0 | q1) & q2");
        let g = q0.clone() & q1.clone() | q2.clone();
        assert_eq!(g.to_string(), "q0 & q1 | q2");
        let h = !(q0 ^ q1) | q2;
        assert_eq!(h.to_string(), "!(q0 ^ q1) | q2");
    }

    #[test]
    fn test_and_all_or_all() {
        let [q0, q1, q2] = Expr::vars();
        let all = Expr::and_all([q0.clone(), q1.clone(), q2.clone()]);
        let any = Expr::or_all([q0, q1, q2]);
        let ones = |e: &Expr| (0..8).filter(|&i| e.eval(&Assignment::from_index(3, i))).count();
        assert_eq!(ones(&all), 1);
        assert_eq!(ones(&any), 7);
        assert_eq!(Expr::and_all(Vec::new()), Expr::constant(true));
        assert_eq!(Expr::or_all(Vec::new()), Expr::constant(false));
    }

    #[test]
    fn test_with_arity() {
        let [q0, q1] = Expr::vars();
        let f = q0.clone() & q1.clone();
        let g = !(!q0 | !q1);
        let report = check_equivalence(f.with_arity(3), g.with_arity(3)).unwrap();
        assert!(report.all_match());
        assert_eq!(report.evaluated(), 8);
    }

    #[test]
    #[should_panic(expected = "Expression needs 3 inputs")]
    fn test_with_arity_too_small() {
        Expr::var(2).with_arity(2);
    }
}
