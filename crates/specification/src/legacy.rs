//! Direct, non-composable product filters.
//!
//! Each filter dimension gets its own hard-coded method, and combining two
//! dimensions needs yet another method. Prefer [`crate::filter`] with a
//! specification; this type stays for comparison and for callers that still
//! use it.

use catalog::{Color, Product, Size};

/// Fixed filter methods over products.
///
/// Every method is a lazy linear scan with the same ordering and
/// multiplicity guarantees as [`crate::filter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn new() -> Self {
        Self
    }

    pub fn filter_by_color<'a, I>(
        &self,
        products: I,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + use<'a, I>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().filter(move |p| p.color() == color)
    }

    pub fn filter_by_size<'a, I>(
        &self,
        products: I,
        size: Size,
    ) -> impl Iterator<Item = &'a Product> + use<'a, I>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().filter(move |p| p.size() == size)
    }

    pub fn filter_by_size_and_color<'a, I>(
        &self,
        products: I,
        size: Size,
        color: Color,
    ) -> impl Iterator<Item = &'a Product> + use<'a, I>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(move |p| p.size() == size && p.color() == color)
    }
}
