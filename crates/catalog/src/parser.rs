//! Parsing of attribute names and JSON catalog files.
//!
//! Attribute names are matched case-insensitively. A catalog file is a JSON
//! array of `{ "name": ..., "color": ..., "size": ... }` records using the
//! enum variant names (`"Green"`, `"Large"`).

use crate::error::{CatalogError, Result};
use crate::types::{Color, Product, ProductRecord, Size};
use std::path::Path;
use std::str::FromStr;

fn parse_color(s: &str) -> Result<Color> {
    match s.trim().to_ascii_lowercase().as_str() {
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "blue" => Ok(Color::Blue),
        _ => Err(CatalogError::UnknownVariant {
            kind: "color",
            value: s.to_string(),
        }),
    }
}

fn parse_size(s: &str) -> Result<Size> {
    match s.trim().to_ascii_lowercase().as_str() {
        "small" => Ok(Size::Small),
        "medium" => Ok(Size::Medium),
        "large" => Ok(Size::Large),
        "yuge" => Ok(Size::Yuge),
        _ => Err(CatalogError::UnknownVariant {
            kind: "size",
            value: s.to_string(),
        }),
    }
}

impl FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        parse_size(s)
    }
}

/// Decode a JSON catalog.
///
/// Records are decoded first and validated afterwards, so an empty name is
/// reported as `InvalidArgument` rather than as a JSON error.
pub fn parse_products_json(json: &str) -> Result<Vec<Product>> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    let products = records
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Parsed {} products from JSON catalog", products.len());
    Ok(products)
}

/// Read and decode a JSON catalog file.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let json = std::fs::read_to_string(path)?;
    parse_products_json(&json)
}
