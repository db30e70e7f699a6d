//! Type-safe wrappers for input variables.
//!
//! Inputs are named `q0`, `q1`, ... after the qubits of the circuits they
//! model. Variable `q_j` is bit `j` of an assignment index.
use std::fmt;

/// Largest number of inputs a function may have.
///
/// Exhaustive checks visit `2^arity` points, so anything above this is
/// out of reach anyway.
pub const MAX_ARITY: u32 = 32;

/// An input variable identifier (0-indexed).
///
/// # Invariants
///
/// - `Var(j)` is bit `j` of an [`Assignment`][crate::assignment::Assignment] index
/// - `j < MAX_ARITY`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u32);

impl Var {
    /// Creates a new variable with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_ARITY`.
    pub fn new(index: u32) -> Self {
        assert!(index < MAX_ARITY, "Variable index must be < {}", MAX_ARITY);
        Var(index)
    }

    /// Returns the raw variable index.
    pub fn index(self) -> u32 {
        self.0
    }

    /// Bit mask selecting this variable in an assignment index.
    pub fn mask(self) -> u64 {
        1 << self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<Var> for u32 {
    fn from(var: Var) -> Self {
        var.0
    }
}
