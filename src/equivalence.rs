//! Exhaustive equivalence checking.
//!
//! Two functions are *equivalent* when they agree on every point of their
//! shared domain. The checker evaluates both candidates at each of the `2^n`
//! points of `{0,1}^n` in canonical order (see [`crate::assignment`]) and
//! records every disagreement, so a failed check tells you exactly where the
//! candidates differ rather than just that they do.
//!
//! The check is pure: it neither prints nor panics on a mismatch. A mismatch
//! is a fact to report, not an error.
//!
//! ```rust
//! use oracle_check::equivalence::check_equivalence;
//! use oracle_check::function::from_fn3;
//!
//! let f = from_fn3(|q0, q1, _| q0 && q1);
//! let g = from_fn3(|q0, q1, _| !(!q0 || !q1));
//! let report = check_equivalence(&f, &g).unwrap();
//! assert!(report.all_match());
//! assert_eq!(report.evaluated(), 8);
//! ```

use std::fmt;

use log::debug;

use crate::assignment::{Assignment, Domain};
use crate::error::{Error, Result};
use crate::function::BooleanFunction;

/// A point where the two candidates disagree.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mismatch<O = bool> {
    pub input: Assignment,
    pub lhs: O,
    pub rhs: O,
}

impl<O: fmt::Display> fmt::Display for Mismatch<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {} != {}", self.input, self.lhs, self.rhs)
    }
}

/// Result of comparing two functions over their whole domain.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EquivalenceReport<O = bool> {
    arity: u32,
    evaluated: u64,
    /// Disagreements, in canonical enumeration order.
    mismatches: Vec<Mismatch<O>>,
}

impl<O> EquivalenceReport<O> {
    pub fn arity(&self) -> u32 {
        self.arity
    }

    /// Number of points at which both candidates were evaluated.
    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    pub fn mismatches(&self) -> &[Mismatch<O>] {
        &self.mismatches
    }

    /// `true` iff the candidates agree everywhere.
    pub fn all_match(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// The verdict line printed by the demo programs.
    pub fn summary(&self) -> &'static str {
        if self.all_match() {
            "All matched."
        } else {
            "Mismatch found!"
        }
    }
}

impl<O: fmt::Display> fmt::Display for EquivalenceReport<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Checked {} points of {{0,1}}^{}: {} mismatch(es)",
            self.evaluated,
            self.arity,
            self.mismatches.len()
        )?;
        for mismatch in &self.mismatches {
            writeln!(f, "  {}", mismatch)?;
        }
        write!(f, "{}", self.summary())
    }
}

/// Compares two Boolean functions at every point of their domain.
///
/// Fails only if the functions have different arities, or the arity is too
/// large to enumerate.
pub fn check_equivalence<F, G>(f: F, g: G) -> Result<EquivalenceReport>
where
    F: BooleanFunction,
    G: BooleanFunction,
{
    if f.arity() != g.arity() {
        return Err(Error::ArityMismatch {
            lhs: f.arity(),
            rhs: g.arity(),
        });
    }
    check_equivalence_by(f.arity(), |a| f.eval(a), |a| g.eval(a))
}

/// Compares two arbitrary functions of `arity` boolean inputs.
///
/// Outputs may be any comparable type, e.g. a whole output word of a
/// circuit rather than a single bit.
pub fn check_equivalence_by<O, F, G>(arity: u32, f: F, g: G) -> Result<EquivalenceReport<O>>
where
    O: PartialEq,
    F: Fn(&Assignment) -> O,
    G: Fn(&Assignment) -> O,
{
    let domain = Domain::new(arity)?;
    debug!("check_equivalence: enumerating {} points of arity {}", domain.size(), arity);

    let mut evaluated = 0u64;
    let mismatches: Vec<Mismatch<O>> = domain
        .iter()
        .inspect(|_| evaluated += 1)
        .filter_map(|input| {
            let lhs = f(&input);
            let rhs = g(&input);
            if lhs == rhs {
                None
            } else {
                Some(Mismatch { input, lhs, rhs })
            }
        })
        .collect();

    debug!("check_equivalence: {} of {} points disagree", mismatches.len(), evaluated);

    Ok(EquivalenceReport {
        arity,
        evaluated,
        mismatches,
    })
}
