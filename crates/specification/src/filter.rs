//! Applying a specification to a sequence of items.
//!
//! `filter` is lazy and pull-based: each call to `next()` examines source
//! items only until it finds the next match, and nothing is collected up
//! front. The returned iterator is single pass; to filter again, call
//! `filter` again on the original source.

use crate::traits::Specification;
use rayon::prelude::*;
use std::borrow::Borrow;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// Lazy iterator over the items of `I` that satisfy a specification.
///
/// Yields items in source order, duplicates included. Works both for
/// borrowed items (`&Product`) and owned ones (`Product`).
pub struct Filtered<'s, I, S: ?Sized, T: ?Sized> {
    iter: I,
    spec: &'s S,
    examined: usize,
    matched: usize,
    exhausted: bool,
    _item: PhantomData<fn(&T)>,
}

impl<'s, I, S: ?Sized, T: ?Sized> Filtered<'s, I, S, T> {
    fn new(iter: I, spec: &'s S) -> Self {
        Self {
            iter,
            spec,
            examined: 0,
            matched: 0,
            exhausted: false,
            _item: PhantomData,
        }
    }

    /// Number of source items examined so far.
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Number of items yielded so far.
    pub fn matched(&self) -> usize {
        self.matched
    }
}

impl<I, S, T> Iterator for Filtered<'_, I, S, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    S: Specification<T> + ?Sized,
    T: ?Sized,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.exhausted {
            return None;
        }

        for item in self.iter.by_ref() {
            self.examined += 1;
            if self.spec.is_satisfied(item.borrow()) {
                self.matched += 1;
                return Some(item);
            }
        }

        self.exhausted = true;
        tracing::debug!(
            "Filter exhausted: {} (examined: {}, matched: {})",
            self.spec.describe(),
            self.examined,
            self.matched
        );
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

impl<I, S, T> FusedIterator for Filtered<'_, I, S, T>
where
    I: Iterator,
    I::Item: Borrow<T>,
    S: Specification<T> + ?Sized,
    T: ?Sized,
{
}

/// Lazily yield the items of `items` that satisfy `spec`.
///
/// ```
/// use catalog::{Color, sample_products};
/// use specification::{ColorSpecification, filter};
///
/// let products = sample_products();
/// let green = ColorSpecification::new(Color::Green);
///
/// let names: Vec<&str> = filter(&products, &green).map(|p| p.name()).collect();
/// assert_eq!(names, ["Apple", "Tree"]);
/// ```
pub fn filter<'s, T, I, S>(items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S, T>
where
    T: ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
    S: Specification<T> + ?Sized,
{
    Filtered::new(items.into_iter(), spec)
}

/// The filter contract: apply any specification to any sequence.
pub trait Filter<T: ?Sized> {
    fn filter<'s, I, S>(&self, items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S, T>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        S: Specification<T> + ?Sized;
}

/// The standard `Filter`: a thin handle over [`filter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecificationFilter;

impl SpecificationFilter {
    pub fn new() -> Self {
        Self
    }
}

impl<T: ?Sized> Filter<T> for SpecificationFilter {
    fn filter<'s, I, S>(&self, items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S, T>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
        S: Specification<T> + ?Sized,
    {
        filter(items, spec)
    }
}

/// Iterator extension for filtering with a specification.
pub trait FilterExt: Iterator + Sized {
    /// Same as [`filter`], in method form.
    fn satisfying<'s, T, S>(self, spec: &'s S) -> Filtered<'s, Self, S, T>
    where
        T: ?Sized,
        Self::Item: Borrow<T>,
        S: Specification<T> + ?Sized,
    {
        Filtered::new(self, spec)
    }
}

impl<I: Iterator> FilterExt for I {}

/// Eagerly filter a slice on the rayon thread pool.
///
/// Unlike [`filter`] this evaluates every item before returning, so it is
/// meant for large catalogs where evaluation dominates. The result keeps
/// source order.
pub fn par_filter<'a, T, S>(items: &'a [T], spec: &S) -> Vec<&'a T>
where
    T: Sync,
    S: Specification<T> + Sync + ?Sized,
{
    let matched: Vec<&T> = items.par_iter().filter(|item| spec.is_satisfied(item)).collect();
    tracing::debug!(
        "Parallel filter: {} (examined: {}, matched: {})",
        spec.describe(),
        items.len(),
        matched.len()
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{ColorSpecification, Predicate, SizeSpecification};
    use catalog::{Color, Product, Size, sample_products};
    use std::cell::Cell;

    fn names<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        products.into_iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_filter_borrowed() {
        let products = sample_products();
        let large = SizeSpecification::new(Size::Large);

        assert_eq!(names(filter(&products, &large)), vec!["Tree", "House"]);
    }

    #[test]
    fn test_filter_owned() {
        let green = ColorSpecification::new(Color::Green);
        let owned: Vec<Product> = filter(sample_products(), &green).collect();

        assert_eq!(names(&owned), vec!["Apple", "Tree"]);
    }

    #[test]
    fn test_filter_empty_input() {
        let products: Vec<Product> = Vec::new();
        let green = ColorSpecification::new(Color::Green);

        assert_eq!(filter(&products, &green).count(), 0);
    }

    #[test]
    fn test_filter_no_matches() {
        let products = sample_products();
        let red = ColorSpecification::new(Color::Red);

        assert!(filter(&products, &red).next().is_none());
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let apple = Product::new("Apple", Color::Green, Size::Small).unwrap();
        let products = vec![apple.clone(), apple.clone(), apple];
        let small = SizeSpecification::new(Size::Small);

        assert_eq!(filter(&products, &small).count(), 3);
    }

    #[test]
    fn test_filter_is_lazy() {
        let products = sample_products();
        let calls = Cell::new(0);
        let counting = Predicate::new("green (counted)", |p: &Product| {
            calls.set(calls.get() + 1);
            p.color() == Color::Green
        });

        let mut filtered = filter(&products, &counting);
        assert_eq!(calls.get(), 0);

        assert_eq!(filtered.next().map(|p| p.name()), Some("Apple"));
        assert_eq!(calls.get(), 1);
        assert_eq!(filtered.examined(), 1);

        assert_eq!(filtered.next().map(|p| p.name()), Some("Tree"));
        assert_eq!(calls.get(), 2);

        assert!(filtered.next().is_none());
        assert_eq!(calls.get(), 3);
        assert_eq!(filtered.matched(), 2);

        // Exhausted iterators do not touch the source again
        assert!(filtered.next().is_none());
        assert_eq!(calls.get(), 3);
        assert_eq!(filtered.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_filter_trait_and_extension() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);

        let via_trait = names(SpecificationFilter::new().filter(&products, &green));
        let via_ext = names(products.iter().satisfying(&green));

        assert_eq!(via_trait, vec!["Apple", "Tree"]);
        assert_eq!(via_trait, via_ext);
    }

    #[test]
    fn test_filter_dyn_specification() {
        let products = sample_products();
        let spec: Box<dyn Specification<Product>> = Box::new(ColorSpecification::new(Color::Blue));

        assert_eq!(names(filter(&products, &spec)), vec!["House"]);
        assert_eq!(names(filter(&products, spec.as_ref())), vec!["House"]);
    }

    #[test]
    fn test_par_filter_preserves_order() {
        let mut products = Vec::new();
        for i in 0..1000 {
            let color = Color::ALL[i % Color::ALL.len()];
            products.push(Product::new(format!("Item {i}"), color, Size::Medium).unwrap());
        }
        let green = ColorSpecification::new(Color::Green);

        let sequential: Vec<&Product> = filter(&products, &green).collect();
        let parallel = par_filter(&products, &green);

        assert_eq!(parallel.len(), 333);
        assert_eq!(parallel, sequential);
    }
}
