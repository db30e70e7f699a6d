//! Input assignments and the exhaustive domain `{0,1}^n`.
//!
//! An [`Assignment`] of `n` inputs is stored as an `n`-bit index where bit `j`
//! holds the value of `q_j`. Enumerating indices `0..2^n` therefore visits the
//! domain in lexicographic order on `(q_{n-1}, ..., q_0)`: the highest
//! variable changes slowest, exactly like nested loops with `q_{n-1}`
//! outermost.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{Var, MAX_ARITY};

/// One point of the domain `{0,1}^n`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Assignment {
    // Field order matters: the derived `Ord` must compare `index` first.
    index: u64,
    arity: u32,
}

impl Assignment {
    /// Creates the assignment with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `arity > MAX_ARITY` or `index >= 2^arity`.
    pub fn from_index(arity: u32, index: u64) -> Self {
        assert!(arity <= MAX_ARITY, "Arity {} exceeds {}", arity, MAX_ARITY);
        assert!(index < (1u64 << arity), "Index {} out of range for arity {}", index, arity);
        Self { index, arity }
    }

    /// Creates an assignment from values listed as `[q0, q1, ..., q_{n-1}]`.
    pub fn from_values(values: &[bool]) -> Self {
        let index = values
            .iter()
            .enumerate()
            .fold(0u64, |acc, (j, &b)| acc | ((b as u64) << j));
        Self::from_index(values.len() as u32, index)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn arity(&self) -> u32 {
        self.arity
    }

    /// Value of the given variable.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not an input of this assignment.
    pub fn get(&self, var: Var) -> bool {
        assert!(var.index() < self.arity, "Variable {} out of range for arity {}", var, self.arity);
        self.index & var.mask() != 0
    }

    /// Value of `q_j`.
    pub fn bit(&self, j: u32) -> bool {
        self.get(Var::new(j))
    }

    /// Values listed as `[q0, q1, ..., q_{n-1}]`.
    pub fn values(&self) -> Vec<bool> {
        (0..self.arity).map(|j| self.bit(j)).collect()
    }
}

/// Renders the assignment most-significant variable first, e.g. `1 0 1`
/// for `q2=1, q1=0, q0=1`.
impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in (0..self.arity).rev() {
            if j + 1 < self.arity {
                write!(f, " ")?;
            }
            write!(f, "{}", self.bit(j) as u8)?;
        }
        Ok(())
    }
}

/// The full domain `{0,1}^arity`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Domain {
    arity: u32,
}

impl Domain {
    pub fn new(arity: u32) -> Result<Self> {
        if arity > MAX_ARITY {
            return Err(Error::ArityTooLarge(arity));
        }
        Ok(Self { arity })
    }

    pub fn arity(&self) -> u32 {
        self.arity
    }

    /// Number of points, `2^arity`.
    pub fn size(&self) -> u64 {
        1 << self.arity
    }

    /// Iterates over every assignment in canonical order.
    pub fn iter(&self) -> Assignments {
        Assignments {
            arity: self.arity,
            next: 0,
            end: self.size(),
        }
    }
}

impl IntoIterator for Domain {
    type Item = Assignment;
    type IntoIter = Assignments;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`Domain`].
#[derive(Debug, Clone)]
pub struct Assignments {
    arity: u32,
    next: u64,
    end: u64,
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let assignment = Assignment {
            index: self.next,
            arity: self.arity,
        };
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Assignments {}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use test_log::test;

    #[test]
    fn test_domain_visits_every_point_once() {
        let domain = Domain::new(3).unwrap();
        let points: Vec<Assignment> = domain.iter().collect();
        assert_eq!(points.len(), 8);
        let distinct: HashSet<u64> = points.iter().map(|a| a.index()).collect();
        assert_eq!(distinct.len(), 8);
    }

    #[test]
    fn test_domain_order_matches_nested_loops() {
        let mut expected = vec![];
        for q2 in [false, true] {
            for q1 in [false, true] {
                for q0 in [false, true] {
                    expected.push(vec![q0, q1, q2]);
                }
            }
        }
        let actual: Vec<Vec<bool>> = Domain::new(3).unwrap().iter().map(|a| a.values()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_domain_is_sorted() {
        let points: Vec<Assignment> = Domain::new(4).unwrap().into_iter().collect();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_arity_has_one_point() {
        let domain = Domain::new(0).unwrap();
        assert_eq!(domain.size(), 1);
        assert_eq!(domain.iter().count(), 1);
    }

    #[test]
    fn test_domain_too_large() {
        assert_eq!(Domain::new(MAX_ARITY + 1), Err(Error::ArityTooLarge(MAX_ARITY + 1)));
    }

    #[test]
    fn test_from_values() {
        let a = Assignment::from_values(&[true, false, true]);
        assert_eq!(a.index(), 0b101);
        assert!(a.bit(0));
        assert!(!a.bit(1));
        assert!(a.bit(2));
        assert_eq!(a.to_string(), "1 0 1");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range() {
        let a = Assignment::from_index(2, 0);
        a.bit(2);
    }
}
