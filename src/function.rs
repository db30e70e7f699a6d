//! Boolean functions over a finite domain.

use crate::assignment::{Assignment, Domain};
use crate::error::Result;

/// A total, pure function `{0,1}^n -> {0,1}`.
///
/// Implementors are identified only by their behaviour: two functions with the
/// same arity and the same value at every point are interchangeable.
pub trait BooleanFunction {
    /// Number of inputs.
    fn arity(&self) -> u32;

    /// Value at the given point. `input.arity()` equals `self.arity()`.
    fn eval(&self, input: &Assignment) -> bool;

    /// The domain this function is defined on.
    fn domain(&self) -> Result<Domain> {
        Domain::new(self.arity())
    }
}

impl<F: BooleanFunction + ?Sized> BooleanFunction for &F {
    fn arity(&self) -> u32 {
        (**self).arity()
    }

    fn eval(&self, input: &Assignment) -> bool {
        (**self).eval(input)
    }
}

/// Adapter turning a closure over an [`Assignment`] into a [`BooleanFunction`].
#[derive(Clone)]
pub struct FnFunction<F> {
    arity: u32,
    f: F,
}

impl<F> FnFunction<F>
where
    F: Fn(&Assignment) -> bool,
{
    pub fn new(arity: u32, f: F) -> Self {
        Self { arity, f }
    }
}

impl<F> BooleanFunction for FnFunction<F>
where
    F: Fn(&Assignment) -> bool,
{
    fn arity(&self) -> u32 {
        self.arity
    }

    fn eval(&self, input: &Assignment) -> bool {
        (self.f)(input)
    }
}

/// Wraps a 3-input function taking `(q0, q1, q2)`.
pub fn from_fn3<F>(f: F) -> FnFunction<impl Fn(&Assignment) -> bool>
where
    F: Fn(bool, bool, bool) -> bool,
{
    FnFunction::new(3, move |a: &Assignment| f(a.bit(0), a.bit(1), a.bit(2)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_fn_function() {
        let and = FnFunction::new(2, |a: &Assignment| a.bit(0) && a.bit(1));
        assert_eq!(and.arity(), 2);
        let ones: Vec<u64> = and.domain().unwrap().iter().filter(|a| and.eval(a)).map(|a| a.index()).collect();
        assert_eq!(ones, vec![0b11]);
    }

    #[test]
    fn test_from_fn3_argument_order() {
        // Only q2 is set at index 0b100.
        let f = from_fn3(|_q0, _q1, q2| q2);
        assert!(f.eval(&Assignment::from_index(3, 0b100)));
        assert!(!f.eval(&Assignment::from_index(3, 0b001)));
    }

    #[test]
    fn test_reference_is_a_function() {
        fn count_ones(f: impl BooleanFunction) -> usize {
            f.domain().unwrap().iter().filter(|a| f.eval(a)).count()
        }

        let f = FnFunction::new(1, |a: &Assignment| !a.bit(0));
        assert_eq!(count_ones(&f), 1);
        let dynamic: &dyn BooleanFunction = &f;
        assert_eq!(count_ones(dynamic), 1);
    }
}
