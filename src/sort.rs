use crate::prelude::*;
use log::trace;

/// Heap sort `items` in place in O(n log n).
///
/// The item the comparator puts at the root ends up last, so `MaxOrder`
/// sorts ascending and `MinOrder` descending.
pub fn sort_slice<T, C: Comparator<T>>(items: &mut [T], order: &C) {
    heapify(items, order);
    sort_heap(items, order);
}

/// Heap sort an owned sequence, reusing its storage.
pub fn heap_sort<T, C: Comparator<T>>(mut items: Vec<T>, order: C) -> Vec<T> {
    trace!("heap sorting {} items", items.len());
    sort_slice(&mut items, &order);
    items
}

/// Sort `items`, which must already satisfy the heap property: move the
/// root behind a shrinking heap one slot at a time.
pub(crate) fn sort_heap<T, C: Comparator<T>>(items: &mut [T], order: &C) {
    debug_assert!(is_heap(items, order));
    for end in (1..items.len()).rev() {
        items.swap(0, end);
        sift_down(items, 0, end, order);
    }
}
