//! Variadic composites.
//!
//! `AllOf` and `AnyOf` hold any number of specifications, added with the
//! builder pattern. They are the n-ary forms of `AndSpecification` and
//! `OrSpecification` for when the set of conditions is only known at run
//! time (e.g. built from command-line flags).

use crate::traits::Specification;

type BoxedSpecification<T> = Box<dyn Specification<T> + Send + Sync>;

/// Satisfied when every contained specification is satisfied.
///
/// ## Usage
/// ```
/// use catalog::{Color, Product, Size};
/// use specification::{AllOf, ColorSpecification, SizeSpecification, Specification};
///
/// let spec = AllOf::new()
///     .with(ColorSpecification::new(Color::Green))
///     .with(SizeSpecification::new(Size::Small));
///
/// let apple = Product::new("Apple", Color::Green, Size::Small)?;
/// assert!(spec.is_satisfied(&apple));
/// # Ok::<(), catalog::CatalogError>(())
/// ```
///
/// An empty `AllOf` is satisfied by everything.
pub struct AllOf<T: ?Sized> {
    specs: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> AllOf<T> {
    /// Create a new empty AllOf.
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    /// Add a specification (builder pattern).
    ///
    /// Specifications are evaluated in the order they were added.
    pub fn with(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for AllOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Specification<T> for AllOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        for (idx, spec) in self.specs.iter().enumerate() {
            if !spec.is_satisfied(item) {
                tracing::trace!(
                    "AllOf rejected item at specification {} of {}",
                    idx + 1,
                    self.specs.len()
                );
                return false;
            }
        }
        true
    }

    fn describe(&self) -> String {
        if self.specs.is_empty() {
            return "anything".to_string();
        }
        self.specs
            .iter()
            .map(|spec| spec.describe())
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Satisfied when at least one contained specification is satisfied.
///
/// An empty `AnyOf` is satisfied by nothing.
pub struct AnyOf<T: ?Sized> {
    specs: Vec<BoxedSpecification<T>>,
}

impl<T: ?Sized> AnyOf<T> {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with(mut self, spec: impl Specification<T> + Send + Sync + 'static) -> Self {
        self.specs.push(Box::new(spec));
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl<T: ?Sized> Default for AnyOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Specification<T> for AnyOf<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        self.specs.iter().any(|spec| spec.is_satisfied(item))
    }

    fn describe(&self) -> String {
        if self.specs.is_empty() {
            return "nothing".to_string();
        }
        self.specs
            .iter()
            .map(|spec| spec.describe())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
