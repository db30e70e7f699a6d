//! Subtraction through complement and addition.
//!
//! In two's complement `!x == -x - 1`, hence
//!
//! ```text
//! !(!a + b) == -(-a - 1 + b) - 1 == a - b
//! ```
//!
//! so a machine with only an adder and bitwise NOT can subtract. The identity
//! holds for every pair under wrapping arithmetic, including the extremes where
//! `a - b` itself overflows.

use std::fmt;

use log::debug;

/// Operands range over `0..SMOKE_RANGE` in [`smoke_cases`].
pub const SMOKE_RANGE: i32 = 50;

/// `a - b` computed as `!(!a + b)`, wrapping on overflow.
pub fn subtract(a: i32, b: i32) -> i32 {
    !((!a).wrapping_add(b))
}

/// One evaluated pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SubtractionCase {
    pub a: i32,
    pub b: i32,
    /// Reference result, `a.wrapping_sub(b)`.
    pub expected: i32,
    /// Result of [`subtract`].
    pub actual: i32,
}

impl SubtractionCase {
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            a,
            b,
            expected: a.wrapping_sub(b),
            actual: subtract(a, b),
        }
    }

    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for SubtractionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} = {}", self.a, self.b, self.actual)
    }
}

/// All pairs of `[0, SMOKE_RANGE) x [0, SMOKE_RANGE)` in row-major order,
/// followed by `(MAX, MIN)` and `(MIN, MAX)`.
pub fn smoke_cases() -> impl Iterator<Item = SubtractionCase> {
    (0..SMOKE_RANGE)
        .flat_map(|a| (0..SMOKE_RANGE).map(move |b| (a, b)))
        .chain([(i32::MAX, i32::MIN), (i32::MIN, i32::MAX)])
        .map(|(a, b)| SubtractionCase::new(a, b))
}

/// Checks every smoke case.
///
/// # Panics
///
/// Panics on the first pair where the identity does not hold. A broken
/// identity means broken arithmetic, so there is nothing to recover.
pub fn verify_subtraction_identity() -> Vec<SubtractionCase> {
    let cases: Vec<SubtractionCase> = smoke_cases()
        .inspect(|case| {
            assert_eq!(
                case.actual, case.expected,
                "subtraction identity violated for {} - {}",
                case.a, case.b
            );
        })
        .collect();
    debug!("verified subtraction identity on {} pairs", cases.len());
    cases
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_small_values() {
        assert_eq!(subtract(7, 3), 4);
        assert_eq!(subtract(3, 7), -4);
        assert_eq!(subtract(0, 0), 0);
        assert_eq!(subtract(0, 49), -49);
    }

    #[test]
    fn test_extremes_wrap() {
        assert_eq!(subtract(i32::MAX, i32::MIN), -1);
        assert_eq!(subtract(i32::MIN, i32::MAX), 1);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
    }

    #[test]
    fn test_smoke_cases_layout() {
        let cases: Vec<SubtractionCase> = smoke_cases().collect();
        assert_eq!(cases.len(), 50 * 50 + 2);
        assert_eq!((cases[0].a, cases[0].b), (0, 0));
        assert_eq!((cases[1].a, cases[1].b), (0, 1));
        assert_eq!((cases[50].a, cases[50].b), (1, 0));
        assert_eq!((cases[2500].a, cases[2500].b), (i32::MAX, i32::MIN));
        assert_eq!((cases[2501].a, cases[2501].b), (i32::MIN, i32::MAX));
        assert!(cases.iter().all(SubtractionCase::holds));
    }

    #[test]
    fn test_verify() {
        let cases = verify_subtraction_identity();
        assert_eq!(cases.len(), 2502);
    }

    #[test]
    fn test_display() {
        assert_eq!(SubtractionCase::new(3, 5).to_string(), "3 - 5 = -2");
        assert_eq!(
            SubtractionCase::new(i32::MAX, i32::MIN).to_string(),
            "2147483647 - -2147483648 = -1"
        );
    }

    #[test]
    fn test_identity_on_sampled_words() {
        let samples = [i32::MIN, i32::MIN + 1, -65536, -1, 0, 1, 12345, i32::MAX - 1, i32::MAX];
        for &a in &samples {
            for &b in &samples {
                assert!(SubtractionCase::new(a, b).holds(), "{} - {}", a, b);
            }
        }
    }
}
