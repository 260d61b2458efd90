use crate::order::Comparator;
use crate::util::index::{left, parent, right};
use std::cmp::Ordering;

/// Move `items[index]` towards the root until its parent precedes it.
/// Returns the slot it came to rest in.
pub(crate) fn sift_up<T, C: Comparator<T>>(
    items: &mut [T],
    mut index: usize,
    order: &C,
) -> usize {
    while index > 0 {
        let up = parent(index);
        if order.compare(&items[up], &items[index]) != Ordering::Less {
            break;
        }
        items.swap(up, index);
        index = up;
    }
    index
}

/// Move `items[index]` towards the leaves of the tree `items[..bound]`
/// until it precedes both children.
/// Returns the slot it came to rest in.
pub(crate) fn sift_down<T, C: Comparator<T>>(
    items: &mut [T],
    mut index: usize,
    bound: usize,
    order: &C,
) -> usize {
    debug_assert!(bound <= items.len());
    loop {
        let left = left(index);
        let right = right(index);
        let mut winner = index;
        if left < bound
            && order.compare(&items[left], &items[winner]) == Ordering::Greater
        {
            winner = left;
        }
        if right < bound
            && order.compare(&items[right], &items[winner]) == Ordering::Greater
        {
            winner = right;
        }
        if winner == index {
            return index;
        }
        items.swap(index, winner);
        index = winner;
    }
}

/// Bottom-up heapify: sift down every internal slot, last first.
pub(crate) fn heapify<T, C: Comparator<T>>(items: &mut [T], order: &C) {
    let len = items.len();
    for index in (0..len / 2).rev() {
        sift_down(items, index, len, order);
    }
}

pub(crate) fn is_heap<T, C: Comparator<T>>(items: &[T], order: &C) -> bool {
    (1..items.len()).all(|index| {
        order.compare(&items[parent(index)], &items[index]) != Ordering::Less
    })
}
