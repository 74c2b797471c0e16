//! # Catalog Crate
//!
//! The entity side of the filtering library: products and their attributes.
//!
//! ## Main Components
//!
//! - **types**: `Color`, `Size` and the immutable `Product`
//! - **parser**: Case-insensitive attribute parsing and JSON catalog decoding
//! - **sample**: The built-in Apple/Tree/House catalog
//! - **error**: Error types for construction and decoding
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Color, Product, Size};
//!
//! let apple = Product::new("Apple", Color::Green, Size::Small)?;
//! assert_eq!(apple.color(), Color::Green);
//!
//! // Empty names are rejected at construction time
//! assert!(Product::new("", Color::Red, Size::Small).is_err());
//! # Ok::<(), catalog::CatalogError>(())
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod sample;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{load_products, parse_products_json};
pub use sample::sample_products;
pub use types::{Color, Product, ProductRecord, Size};
