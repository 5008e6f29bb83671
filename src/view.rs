//! Lazy, restartable views.
//!
//! A view stores a re-iterable source (anything `IntoIterator + Clone`, e.g.
//! `slice.iter().copied()`, an array, or a reference to another view) and a
//! closure. Nothing is computed until the view is iterated, and iterating
//! borrows the view, so the same view can be walked any number of times.
//! Views never cache: every pass re-runs the closure on every element.

use std::iter;

// ============================================================================
// Transform (map)
// ============================================================================

/// The i-th element is `f(source[i])`.
#[derive(Clone)]
#[must_use = "views are lazy and do nothing unless iterated"]
pub struct Transform<S, F> {
    source: S,
    f: F,
}

impl<S, F> Transform<S, F> {
    pub fn new(source: S, f: F) -> Self {
        Self { source, f }
    }
}

impl<S, F, U> Transform<S, F>
where
    S: IntoIterator + Clone,
    F: Fn(S::Item) -> U,
{
    pub fn iter(&self) -> iter::Map<S::IntoIter, &F> {
        self.source.clone().into_iter().map(&self.f)
    }
}

impl<'a, S, F, U> IntoIterator for &'a Transform<S, F>
where
    S: IntoIterator + Clone,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type IntoIter = iter::Map<S::IntoIter, &'a F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Filter
// ============================================================================

/// The elements of `source` for which `predicate` holds, in source order.
#[derive(Clone)]
#[must_use = "views are lazy and do nothing unless iterated"]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Filter<S, P>
where
    S: IntoIterator + Clone,
    P: Fn(&S::Item) -> bool,
{
    pub fn iter(&self) -> iter::Filter<S::IntoIter, &P> {
        self.source.clone().into_iter().filter(&self.predicate)
    }
}

impl<'a, S, P> IntoIterator for &'a Filter<S, P>
where
    S: IntoIterator + Clone,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type IntoIter = iter::Filter<S::IntoIter, &'a P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn transform<S, F, U>(source: S, f: F) -> Transform<S, F>
where
    S: IntoIterator + Clone,
    F: Fn(S::Item) -> U,
{
    Transform::new(source, f)
}

pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: IntoIterator + Clone,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(source, predicate)
}

/// Left-to-right composition for any re-iterable source.
///
/// ```
/// use squares_pipeline::numeric::{is_even, square};
/// use squares_pipeline::view::ViewExt;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let squared = numbers.transform(square);
/// let even = (&squared).keep(|n: &i32| is_even(*n));
///
/// assert_eq!(squared.iter().collect::<Vec<_>>(), [1, 4, 9, 16, 25]);
/// assert_eq!(even.iter().collect::<Vec<_>>(), [4, 16]);
/// ```
pub trait ViewExt: IntoIterator + Clone + Sized {
    fn transform<F, U>(self, f: F) -> Transform<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Transform::new(self, f)
    }

    fn keep<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<S: IntoIterator + Clone> ViewExt for S {}
