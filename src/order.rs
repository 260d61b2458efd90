//! Orderings that decide which of two items sits nearer the root.

use std::cmp::Ordering;

/// Three-way ordering injected into a heap at construction.
///
/// `Greater` means `left` belongs nearer the root than `right`,
/// `Less` the opposite, and `Equal` that neither has to move.
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Largest item at the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Comparator<T> for MaxOrder {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Smallest item at the root.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Comparator<T> for MinOrder {
    fn compare(&self, left: &T, right: &T) -> Ordering {
        right.cmp(left)
    }
}
