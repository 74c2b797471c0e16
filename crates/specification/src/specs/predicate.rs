//! Closure-backed specifications.

use crate::traits::Specification;
use std::fmt;

/// Adapts a closure into a specification.
///
/// Useful for one-off conditions that do not deserve their own type, such
/// as name checks or size ranges.
///
/// ```
/// use catalog::{Color, Product, Size};
/// use specification::{Predicate, Specification};
///
/// let at_least_large = Predicate::new("at least large", |p: &Product| p.size() >= Size::Large);
///
/// let tree = Product::new("Tree", Color::Green, Size::Large)?;
/// assert!(at_least_large.is_satisfied(&tree));
/// # Ok::<(), catalog::CatalogError>(())
/// ```
#[derive(Clone)]
pub struct Predicate<F> {
    description: String,
    predicate: F,
}

impl<F> Predicate<F> {
    pub fn new(description: impl Into<String>, predicate: F) -> Self {
        Self {
            description: description.into(),
            predicate,
        }
    }
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl<T, F> Specification<T> for Predicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    fn is_satisfied(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Color, Product, Size};

    #[test]
    fn test_predicate_specification() {
        let short_name = Predicate::new("short name", |p: &Product| p.name().len() <= 4);
        let tree = Product::new("Tree", Color::Green, Size::Large).unwrap();
        let house = Product::new("House", Color::Blue, Size::Large).unwrap();

        assert!(short_name.is_satisfied(&tree));
        assert!(!short_name.is_satisfied(&house));
        assert_eq!(short_name.describe(), "short name");
    }
}
