//! The 3-input Grover search oracle.
//!
//! The oracle marks the solutions of
//!
//! ```text
//! f(q0, q1, q2) = (q0 ∨ ¬q1) ∧ (¬q0 ∨ q1 ∨ q2) ∧ (q0 ∨ q2)
//! ```
//!
//! which holds at `(q2 q1 q0) ∈ {011, 100, 101, 111}`. Its two-term minimal
//! sum of products is `(q0 ∧ q1) ∨ (¬q1 ∧ q2)`.

use crate::ast::Expr;
use crate::equivalence::{check_equivalence, EquivalenceReport};
use crate::error::Result;
use crate::function::from_fn3;

pub const ORACLE_ARITY: u32 = 3;

/// The oracle in its original product-of-sums form.
pub fn oracle_original(q0: bool, q1: bool, q2: bool) -> bool {
    (q0 || !q1) && (!q0 || q1 || q2) && (q0 || q2)
}

/// The minimized oracle.
pub fn oracle_minimized(q0: bool, q1: bool, q2: bool) -> bool {
    (q0 && q1) || (!q1 && q2)
}

/// The three clauses of [`oracle_original`], in order.
pub fn original_clauses() -> [Expr; 3] {
    let [q0, q1, q2] = Expr::vars();
    [
        q0.clone() | !q1.clone(),
        !q0.clone() | q1 | q2.clone(),
        q0 | q2,
    ]
}

pub fn original_expr() -> Expr {
    Expr::and_all(original_clauses())
}

pub fn minimized_expr() -> Expr {
    let [q0, q1, q2] = Expr::vars();
    (q0 & q1.clone()) | (!q1 & q2)
}

/// Checks the minimized oracle against the original one.
pub fn verify_minimization() -> Result<EquivalenceReport> {
    check_equivalence(from_fn3(oracle_original), from_fn3(oracle_minimized))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::truth_table::TruthTable;

    use test_log::test;

    #[test]
    fn test_known_points() {
        assert!(!oracle_original(false, false, false));
        assert!(oracle_original(true, true, true));
    }

    #[test]
    fn test_minimization_is_sound() {
        let report = verify_minimization().unwrap();
        assert!(report.all_match());
        assert_eq!(report.evaluated(), 8);
        assert_eq!(report.summary(), "All matched.");
    }

    #[test]
    fn test_exprs_match_functions() {
        let original = original_expr();
        let minimized = minimized_expr();
        assert!(check_equivalence(original.with_arity(ORACLE_ARITY), from_fn3(oracle_original))
            .unwrap()
            .all_match());
        assert!(check_equivalence(minimized.with_arity(ORACLE_ARITY), from_fn3(oracle_minimized))
            .unwrap()
            .all_match());
        assert!(minimized.size() < original.size());
    }

    #[test]
    fn test_solutions() {
        let tt = TruthTable::from_function(&from_fn3(oracle_original)).unwrap();
        let solutions: Vec<String> = tt.models().map(|a| a.to_string()).collect();
        assert_eq!(solutions, vec!["0 1 1", "1 0 0", "1 0 1", "1 1 1"]);
    }

    #[test]
    fn test_single_clause_is_not_enough() {
        let [first, ..] = original_clauses();
        let report = check_equivalence(first.with_arity(ORACLE_ARITY), from_fn3(oracle_original)).unwrap();
        assert!(!report.all_match());
        // The first clause alone also accepts 000 and 001.
        let indices: Vec<u64> = report.mismatches().iter().map(|m| m.input.index()).collect();
        assert_eq!(indices, vec![0b000, 0b001]);
    }
}
