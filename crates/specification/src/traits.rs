//! Core traits for composable filtering.
//!
//! This module defines the Specification trait that every predicate
//! implements, plus the combinator methods available on all of them.

use crate::specs::{AndSpecification, NotSpecification, OrSpecification};
use std::sync::Arc;

/// A pure predicate over items of type `T`.
///
/// ## Design Note
/// - Evaluation takes `&self` and `&T`: specifications are stateless and
///   never mutate what they inspect, so one instance can be evaluated any
///   number of times and shared freely (see the `Arc` impl below)
/// - New kinds of predicate are new types implementing this trait; nothing
///   existing has to change
pub trait Specification<T: ?Sized> {
    /// Returns true if `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Human-readable description, e.g. `"green and small"`.
    fn describe(&self) -> String;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Combinator methods for every specification.
///
/// ```
/// use catalog::{Color, Product, Size};
/// use specification::{ColorSpecification, SizeSpecification, Specification, SpecificationExt};
///
/// let green_or_large = ColorSpecification::new(Color::Green)
///     .or(SizeSpecification::new(Size::Large));
///
/// let house = Product::new("House", Color::Blue, Size::Large)?;
/// assert!(green_or_large.is_satisfied(&house));
/// assert!(!green_or_large.not().is_satisfied(&house));
/// # Ok::<(), catalog::CatalogError>(())
/// ```
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Both `self` and `other` must hold. `self` is evaluated first.
    fn and<S: Specification<T>>(self, other: S) -> AndSpecification<Self, S> {
        AndSpecification::new(self, other)
    }

    /// Either `self` or `other` must hold. `self` is evaluated first.
    fn or<S: Specification<T>>(self, other: S) -> OrSpecification<Self, S> {
        OrSpecification::new(self, other)
    }

    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type, e.g. to store mixed specifications together.
    fn boxed<'a>(self) -> Box<dyn Specification<T> + Send + Sync + 'a>
    where
        Self: Send + Sync + 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}
