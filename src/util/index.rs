//! Slot arithmetic for a complete binary tree stored breadth-first.

#[inline(always)]
pub(crate) fn parent(index: usize) -> usize {
    debug_assert!(index > 0, "root has no parent");
    (index - 1) / 2
}

#[inline(always)]
pub(crate) fn left(index: usize) -> usize {
    2 * index + 1
}

#[inline(always)]
pub(crate) fn right(index: usize) -> usize {
    2 * index + 2
}
