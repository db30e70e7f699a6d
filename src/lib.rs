//! # oracle-check: exhaustive checks for small Boolean functions
//!
//! **`oracle-check`** verifies Boolean and bit-level identities by brute
//! force. For functions of a handful of inputs, evaluating every point of
//! `{0,1}^n` is instant, and it gives the strongest answer there is: either
//! the candidates agree everywhere, or here is every input where they don't.
//!
//! ## Basic Usage
//!
//! ```rust
//! use oracle_check::equivalence::check_equivalence;
//! use oracle_check::function::from_fn3;
//! use oracle_check::oracle::{oracle_minimized, oracle_original};
//!
//! let report = check_equivalence(from_fn3(oracle_original), from_fn3(oracle_minimized)).unwrap();
//! assert!(report.all_match());
//! assert_eq!(report.evaluated(), 8);
//! println!("{}", report.summary()); // All matched.
//! ```
//!
//! ## Core Components
//!
//! - **[`equivalence`]**: the checker and its [`EquivalenceReport`][crate::equivalence::EquivalenceReport].
//! - **[`assignment`]**: input points and the canonical enumeration of the domain.
//! - **[`function`]**: the [`BooleanFunction`][crate::function::BooleanFunction] trait.
//! - **[`ast`]** and **[`truth_table`]**: two concrete representations of functions.
//! - **[`oracle`]**: the 3-input Grover oracle and its minimized form.
//! - **[`subtract`]**: the `!(!a + b) == a - b` identity.
//! - **[`circuit`]**: reversible adder, adder/subtractor and oracle circuits,
//!   simulated on classical bits.

pub mod assignment;
pub mod ast;
pub mod circuit;
pub mod equivalence;
pub mod error;
pub mod function;
pub mod oracle;
pub mod subtract;
pub mod truth_table;
pub mod types;

pub use error::{Error, Result};
