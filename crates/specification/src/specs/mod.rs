//! Specification implementations.
//!
//! Leaf specifications compare one product attribute against a stored
//! value. Composite specifications combine other specifications and own
//! them.

pub mod and;
pub mod color;
pub mod not;
pub mod or;
pub mod predicate;
pub mod size;

// Re-export for convenience
pub use and::AndSpecification;
pub use color::ColorSpecification;
pub use not::NotSpecification;
pub use or::OrSpecification;
pub use predicate::Predicate;
pub use size::SizeSpecification;
