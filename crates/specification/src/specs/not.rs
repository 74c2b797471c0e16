//! Negation of a specification.

use crate::traits::Specification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<T, S> Specification<T> for NotSpecification<S>
where
    T: ?Sized,
    S: Specification<T>,
{
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{AndSpecification, ColorSpecification, SizeSpecification};
    use catalog::{Color, Product, Size};

    #[test]
    fn test_not_specification() {
        let tree = Product::new("Tree", Color::Green, Size::Large).unwrap();
        let not_green = NotSpecification::new(ColorSpecification::new(Color::Green));

        assert!(!not_green.is_satisfied(&tree));
        assert_eq!(not_green.describe(), "not green");

        let not_green_small = NotSpecification::new(AndSpecification::new(
            ColorSpecification::new(Color::Green),
            SizeSpecification::new(Size::Small),
        ));
        assert!(not_green_small.is_satisfied(&tree));
    }
}
