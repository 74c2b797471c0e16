//! The built-in sample catalog.

use crate::types::{Color, Product, Size};

/// Apple, Tree and House: the catalog the demo walkthrough filters.
pub fn sample_products() -> Vec<Product> {
    [
        ("Apple", Color::Green, Size::Small),
        ("Tree", Color::Green, Size::Large),
        ("House", Color::Blue, Size::Large),
    ]
    .into_iter()
    .filter_map(|(name, color, size)| Product::new(name, color, size).ok())
    .collect()
}
