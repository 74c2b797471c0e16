//! Logical AND of two specifications.

use crate::error::{Result, SpecificationError};
use crate::traits::Specification;

/// Satisfied when both children are satisfied.
///
/// ## Algorithm
/// 1. Evaluate `first`
/// 2. If it is false, stop: `second` is never evaluated
/// 3. Otherwise the result is `second`
///
/// The composite owns its children. To share a child between several
/// composites, pass a reference or an `Arc`; specifications are pure, so
/// sharing never changes a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndSpecification<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndSpecification<A, B> {
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
            combinator: "and",
            operand: "first",
        })?;
        let second = second.ok_or(SpecificationError::MissingOperand {
            combinator: "and",
            operand: "second",
        })?;
        Ok(Self::new(first, second))
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<T, A, B> Specification<T> for AndSpecification<A, B>
where
    T: ?Sized,
    A: Specification<T>,
    B: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        self.first.is_satisfied(item) && self.second.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("{} and {}", self.first.describe(), self.second.describe())
    }
}
