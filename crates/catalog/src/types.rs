//! Core domain types for the product catalog.
//!
//! Attributes come from small closed enumerations, so they are plain `Copy`
//! enums. A `Product` is immutable once built: its fields are private and
//! only readable through accessors.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Attribute Enums
// =============================================================================

/// Product color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Every color, in declaration order
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// Lowercase name used for display and parsing
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product size, ordered from smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
    Yuge,
}

impl Size {
    /// Every size, smallest first
    pub const ALL: [Size; 4] = [Size::Small, Size::Medium, Size::Large, Size::Yuge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
            Size::Yuge => "yuge",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Equality is structural: two products with the same name, color and size
/// are the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    name: String,
    color: Color,
    size: Size,
}

impl Product {
    /// Create a new product.
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidArgument` if `name` is empty.
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CatalogError::InvalidArgument {
                argument: "name",
                reason: "product name must not be empty".to_string(),
            });
        }
        Ok(Self { name, color, size })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.color, self.size)
    }
}

/// Unvalidated wire form of a `Product`.
///
/// Decoding goes through this record so that `Product::new` stays the only
/// way to obtain a `Product`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        Product::new(record.name, record.color, record.size)
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            color: product.color,
            size: product.size,
        }
    }
}
