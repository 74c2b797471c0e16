//! Logical OR of two specifications.

use crate::error::{Result, SpecificationError};
use crate::traits::Specification;

/// Satisfied when either child is satisfied. `second` is only evaluated
/// when `first` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrSpecification<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Build from possibly-absent children.
    ///
    /// # Errors
    /// Returns `SpecificationError::MissingOperand` naming the first absent
    /// child.
    pub fn try_new(first: Option<A>, second: Option<B>) -> Result<Self> {
        let first = first.ok_or(SpecificationError::MissingOperand {
            combinator: "or",
            operand: "first",
        })?;
        let second = second.ok_or(SpecificationError::MissingOperand {
            combinator: "or",
            operand: "second",
        })?;
        Ok(Self::new(first, second))
    }
}

impl<T, A, B> Specification<T> for OrSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) || self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("{} or {}", self.first.describe(), self.second.describe())
    }
}
