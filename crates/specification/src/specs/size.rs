//! Specification matching products of one size.

use crate::traits::Specification;
use catalog::{Product, Size};

/// Satisfied by products whose size equals the stored size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, product: &Product) -> bool {
        product.size() == self.size
    }

    fn describe(&self) -> String {
        self.size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Color;

    #[test]
    fn test_size_specification() {
        let large = SizeSpecification::new(Size::Large);
        let tree = Product::new("Tree", Color::Green, Size::Large).unwrap();
        let yuge_tree = Product::new("Sequoia", Color::Green, Size::Yuge).unwrap();

        assert!(large.is_satisfied(&tree));
        // Equality only, not "at least"
        assert!(!large.is_satisfied(&yuge_tree));
        assert_eq!(large.describe(), "large");
    }
}
