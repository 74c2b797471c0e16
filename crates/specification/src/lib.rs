//! Composable filtering of products with specifications.
//!
//! This crate provides:
//! - The Specification trait and its combinators
//! - Leaf specifications for product attributes (color, size)
//! - Composite specifications (AND, OR, NOT, AllOf, AnyOf)
//! - A lazy, generic `filter` that applies any specification to any sequence
//! - The legacy `ProductFilter` with one hard-coded method per dimension
//!
//! ## Architecture
//! Conditions are values, not methods:
//! 1. Leaf specifications test one attribute
//! 2. Composites combine specifications without knowing what they test
//! 3. `filter` pulls matches out of a sequence one at a time
//!
//! Adding a new kind of condition means adding a new type that implements
//! `Specification`; no existing code changes.
//!
//! ## Example Usage
//! ```
//! use catalog::{Color, Size, sample_products};
//! use specification::{ColorSpecification, SizeSpecification, SpecificationExt, filter};
//!
//! let products = sample_products();
//! let spec = ColorSpecification::new(Color::Blue).and(SizeSpecification::new(Size::Large));
//!
//! let matches: Vec<_> = filter(&products, &spec).collect();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].name(), "House");
//! ```

pub mod all_of;
pub mod error;
pub mod filter;
pub mod legacy;
pub mod specs;
pub mod traits;

// Re-export main types
pub use all_of::{AllOf, AnyOf};
pub use error::{Result, SpecificationError};
pub use filter::{Filter, FilterExt, Filtered, SpecificationFilter, filter, par_filter};
pub use legacy::ProductFilter;
pub use specs::{
    AndSpecification, ColorSpecification, NotSpecification, OrSpecification, Predicate,
    SizeSpecification,
};
pub use traits::{Specification, SpecificationExt};
