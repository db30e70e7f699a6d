//! Truth table representation for Boolean functions.
//!
//! A Boolean function `f: {0,1}^n → {0,1}` is represented by its truth table,
//! a `2^n`-bit vector where bit `i` is the value of `f` at the assignment with
//! index `i` (see [`crate::assignment`]).

use std::fmt;

use num_bigint::BigUint;

use crate::assignment::Assignment;
use crate::error::Result;
use crate::function::BooleanFunction;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    /// Number of variables
    n: u32,
    /// The truth table as a big integer (2^n bits)
    bits: BigUint,
}

impl TruthTable {
    /// Tabulates `f` over its whole domain.
    pub fn from_function(f: &impl BooleanFunction) -> Result<Self> {
        let domain = f.domain()?;
        let mut bits = BigUint::ZERO;
        for input in domain {
            if f.eval(&input) {
                bits.set_bit(input.index(), true);
            }
        }
        Ok(Self { n: domain.arity(), bits })
    }

    /// Create the constant zero function.
    pub fn zero(n: u32) -> Self {
        Self { n, bits: BigUint::ZERO }
    }

    /// Create the constant one function.
    pub fn one(n: u32) -> Self {
        let bits = (BigUint::from(1u8) << (1usize << n)) - 1u8;
        Self { n, bits }
    }

    pub fn num_vars(&self) -> u32 {
        self.n
    }

    /// Number of rows, `2^n`.
    pub fn size(&self) -> u64 {
        1 << self.n
    }

    pub fn bits(&self) -> &BigUint {
        &self.bits
    }

    /// Value at the row with the given index.
    pub fn eval_index(&self, index: u64) -> bool {
        assert!(index < self.size(), "Input index out of range");
        self.bits.bit(index)
    }

    /// Count the number of true outputs (Hamming weight).
    pub fn count_ones(&self) -> u64 {
        self.bits.count_ones()
    }

    pub fn is_zero(&self) -> bool {
        self.bits == BigUint::ZERO
    }

    pub fn is_one(&self) -> bool {
        self.count_ones() == self.size()
    }

    /// Rows in canonical order.
    pub fn rows(&self) -> impl Iterator<Item = (Assignment, bool)> + '_ {
        (0..self.size()).map(move |i| (Assignment::from_index(self.n, i), self.bits.bit(i)))
    }

    /// Satisfying assignments in canonical order.
    pub fn models(&self) -> impl Iterator<Item = Assignment> + '_ {
        self.rows().filter_map(|(a, v)| v.then_some(a))
    }
}

impl BooleanFunction for TruthTable {
    fn arity(&self) -> u32 {
        self.n
    }

    fn eval(&self, input: &Assignment) -> bool {
        assert_eq!(input.arity(), self.n, "Expected {} inputs, got {}", self.n, input.arity());
        self.bits.bit(input.index())
    }
}

/// Renders one row per line, highest variable first, with a header:
///
/// ```text
/// q2 q1 q0 f
/// 0 0 0 0
/// 0 0 1 0
/// ...
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in (0..self.n).rev() {
            write!(f, "q{} ", j)?;
        }
        write!(f, "f")?;
        for (input, value) in self.rows() {
            writeln!(f)?;
            if self.n > 0 {
                write!(f, "{} ", input)?;
            }
            write!(f, "{}", value as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ast::Expr;
    use crate::equivalence::check_equivalence;
    use crate::function::from_fn3;

    use test_log::test;

    #[test]
    fn test_from_function() {
        let majority = from_fn3(|a, b, c| (a && b) || (a && c) || (b && c));
        let tt = TruthTable::from_function(&majority).unwrap();
        assert_eq!(tt.num_vars(), 3);
        assert_eq!(tt.count_ones(), 4);
        assert_eq!(tt.bits(), &BigUint::from(0b1110_1000u32));
        let models: Vec<u64> = tt.models().map(|a| a.index()).collect();
        assert_eq!(models, vec![3, 5, 6, 7]);
    }

    #[test]
    fn test_constants() {
        assert!(TruthTable::zero(3).is_zero());
        assert!(TruthTable::one(3).is_one());
        assert_eq!(TruthTable::one(3).count_ones(), 8);
        assert!(!TruthTable::one(2).is_zero());
    }

    #[test]
    fn test_table_equivalent_to_source() {
        let [q0, q1, q2] = Expr::vars();
        let f = (q0 ^ q1) | !q2;
        let tt = TruthTable::from_function(&f.with_arity(3)).unwrap();
        let report = check_equivalence(&tt, f.with_arity(3)).unwrap();
        assert!(report.all_match());
    }

    #[test]
    fn test_display() {
        let f = Expr::var(0) & Expr::var(1);
        let tt = TruthTable::from_function(&f.with_arity(2)).unwrap();
        assert_eq!(tt.to_string(), "q1 q0 f\n0 0 0\n0 1 0\n1 0 0\n1 1 1");
    }

    #[test]
    fn test_rows_in_order() {
        let tt = TruthTable::one(3);
        let indices: Vec<u64> = tt.rows().map(|(a, _)| a.index()).collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
    }
}
