use crate::prelude::*;
use log::trace;
use spin::RwLock;
use std::fmt;

/// Array-backed binary heap shared between threads.
///
/// The comparator decides which item sits at the root: see
/// [`Comparator`](crate::Comparator). All storage lives behind one
/// reader-writer lock. `peek`, `len` and `items` read, every mutation
/// holds the write lock for the whole sift. The lock does not favour
/// writers, so a steady stream of readers can hold off `insert` and `pop`.
///
/// Slots are positions, not identities: any mutation may move an item.
pub struct Heap<T, C> {
    items: RwLock<Vec<T>>,
    order: C,
}

impl<T: Ord> Heap<T, MaxOrder> {
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T: Ord> Heap<T, MinOrder> {
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> Default for Heap<T, MaxOrder> {
    fn default() -> Self {
        Self::max()
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    pub fn new(order: C) -> Self {
        Self::with_capacity(0, order)
    }

    pub fn with_capacity(capacity: usize, order: C) -> Self {
        let items = RwLock::new(Vec::with_capacity(capacity));
        Self { items, order }
    }

    /// Take ownership of `items` and heapify them bottom-up in O(n).
    pub fn build(mut items: Vec<T>, order: C) -> Self {
        heapify(&mut items, &order);
        trace!("built heap of {} items", items.len());
        let items = RwLock::new(items);
        Self { items, order }
    }

    pub fn order(&self) -> &C {
        &self.order
    }

    pub fn insert(&self, item: T) {
        let mut items = self.items.write();
        items.push(item);
        let tail = items.len() - 1;
        sift_up(items.as_mut_slice(), tail, &self.order);
    }

    /// Remove and return the root.
    pub fn pop(&self) -> Result<T> {
        let mut items = self.items.write();
        if items.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let top = items.swap_remove(0);
        let len = items.len();
        if len > 1 {
            sift_down(items.as_mut_slice(), 0, len, &self.order);
        }
        Ok(top)
    }

    /// Apply `f` to the root while holding the read lock.
    ///
    /// `f` must not touch the same heap: a mutation from inside it spins
    /// forever on the write lock.
    pub fn peek_with<R, F: FnOnce(&T) -> R>(&self, f: F) -> Result<R> {
        let items = self.items.read();
        items.first().map(f).ok_or(Error::EmptyHeap)
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Restore the heap property upwards from `index`, after the item
    /// there has moved nearer the root in the comparator's sense.
    pub fn up_heap(&self, index: usize) -> Result<()> {
        let mut items = self.items.write();
        check_range(index, items.len())?;
        sift_up(items.as_mut_slice(), index, &self.order);
        Ok(())
    }

    /// Restore the heap property downwards from `index`, after the item
    /// there has moved away from the root in the comparator's sense.
    pub fn down_heap(&self, index: usize) -> Result<()> {
        let mut items = self.items.write();
        let len = items.len();
        check_range(index, len)?;
        sift_down(items.as_mut_slice(), index, len, &self.order);
        Ok(())
    }

    pub fn clear(&self) {
        self.items.write().clear();
    }

    pub fn is_valid(&self) -> bool {
        is_heap(self.items.read().as_slice(), &self.order)
    }

    /// Backing storage in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_inner()
    }

    /// Sort the backing storage in place: the root's neighbours in the
    /// ordering end up last, so `MaxOrder` gives ascending output.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let order = self.order;
        let mut items = self.items.into_inner();
        sort_heap(&mut items, &order);
        items
    }

    pub(crate) fn inspect<R, F: FnOnce(&[T]) -> R>(&self, f: F) -> R {
        f(self.items.read().as_slice())
    }

    /// Run `f` on the storage under one write lock, so that a slot found
    /// by `f` stays valid until `f` returns.
    pub(crate) fn modify<R, F: FnOnce(&mut [T], &C) -> R>(&self, f: F) -> R {
        let mut items = self.items.write();
        f(items.as_mut_slice(), &self.order)
    }
}

impl<T: Clone, C: Comparator<T>> Heap<T, C> {
    pub fn peek(&self) -> Result<T> {
        self.peek_with(T::clone)
    }

    /// An owned snapshot of the backing storage, in heap order.
    pub fn items(&self) -> Vec<T> {
        self.items.read().to_vec()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Heap")
            .field("items", &*self.items.read())
            .finish()
    }
}

fn check_range(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, C: Comparator<T>>(heap: &Heap<T, C>) -> Vec<T> {
        let mut drained = vec![];
        while let Ok(item) = heap.pop() {
            drained.push(item);
        }
        drained
    }

    #[test]
    fn test_new() {
        let heap: Heap<i32, _> = Heap::max();
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert!(heap.is_valid());
    }

    #[test]
    fn test_empty() {
        let heap: Heap<i32, _> = Heap::min();
        assert_eq!(heap.pop(), Err(Error::EmptyHeap));
        assert_eq!(heap.peek(), Err(Error::EmptyHeap));
        assert_eq!(heap.peek_with(|_| ()), Err(Error::EmptyHeap));
    }

    #[test]
    fn test_insert() {
        let heap = Heap::max();
        for (count, item) in [10, 30, 20, 40, 50].iter().enumerate() {
            heap.insert(*item);
            assert_eq!(heap.len(), count + 1);
            assert!(heap.is_valid());
        }
        assert_eq!(heap.peek(), Ok(50));
    }

    #[test]
    fn test_pop_order() {
        let heap = Heap::max();
        for item in vec![10, 30, 20, 40, 50, 15, 25] {
            heap.insert(item);
        }
        assert_eq!(drain(&heap), vec![50, 40, 30, 25, 20, 15, 10]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_min_heap() {
        let heap = Heap::min();
        for item in vec![5, 3, 8, 1, 9, 2] {
            heap.insert(item);
        }
        assert_eq!(heap.peek(), Ok(1));
        assert_eq!(drain(&heap), vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_closure_order() {
        let heap = Heap::new(|left: &&str, right: &&str| {
            right.len().cmp(&left.len())
        });
        for word in vec!["banana", "fig", "apple", "kiwi"] {
            heap.insert(word);
        }
        assert_eq!(heap.pop(), Ok("fig"));
        assert_eq!(heap.pop(), Ok("kiwi"));
        assert_eq!(heap.pop(), Ok("apple"));
        assert_eq!(heap.pop(), Ok("banana"));
    }

    #[test]
    fn test_size_tracks_operations() {
        let heap = Heap::max();
        let mut expected = 0;
        let mut seed = 12345u64;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            if seed >> 62 == 0 {
                if heap.pop().is_ok() {
                    expected -= 1;
                }
            } else {
                heap.insert(seed >> 40);
                expected += 1;
            }
            assert_eq!(heap.len(), expected);
            assert!(heap.is_valid());
        }
    }

    #[test]
    fn test_build() {
        let heap = Heap::build(vec![10, 30, 20, 40, 50], MaxOrder);
        assert_eq!(heap.peek(), Ok(50));
        assert!(heap.is_valid());
        assert_eq!(heap.len(), 5);

        let heap = Heap::build(vec![10, 30, 20, 40, 50], MinOrder);
        assert_eq!(heap.peek(), Ok(10));
        assert!(heap.is_valid());
    }

    #[test]
    fn test_build_then_insert() {
        let heap = Heap::build(vec![3, 1, 2], MaxOrder);
        heap.insert(7);
        heap.insert(0);
        assert_eq!(drain(&heap), vec![7, 3, 2, 1, 0]);
    }

    #[test]
    fn test_items_is_snapshot() {
        let heap = Heap::build(vec![1, 2, 3], MaxOrder);
        let snapshot = heap.items();
        assert_eq!(heap.pop(), Ok(3));
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot[0], 3);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_out_of_range() {
        let heap = Heap::build(vec![1, 2, 3], MaxOrder);
        assert_eq!(
            heap.up_heap(3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            heap.down_heap(10),
            Err(Error::OutOfRange { index: 10, len: 3 })
        );
        assert_eq!(heap.items().len(), 3);
        assert!(heap.up_heap(2).is_ok());
        assert!(heap.down_heap(0).is_ok());
    }

    #[test]
    fn test_directed_sifts_after_external_change() {
        let heap = Heap::new(|left: &(u32, i32), right: &(u32, i32)| {
            left.0.cmp(&right.0)
        });
        heap.insert((10, 0));
        heap.insert((20, 1));
        heap.insert((30, 2));
        heap.insert((5, 3));

        let slot = heap.modify(|items, _| {
            let slot = items.iter().position(|item| item.1 == 3).unwrap();
            items[slot].0 = 40;
            slot
        });
        heap.up_heap(slot).unwrap();
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Ok((40, 3)));

        heap.modify(|items, _| items[0].0 = 1);
        heap.down_heap(0).unwrap();
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Ok((30, 2)));
    }

    #[test]
    fn test_clear() {
        let heap = Heap::build(vec![1, 2, 3], MinOrder);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), Err(Error::EmptyHeap));
    }

    #[test]
    fn test_into_sorted_vec() {
        let heap = Heap::build(vec![5, 3, 8, 1, 9, 2], MaxOrder);
        assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);

        let heap = Heap::build(vec![5, 3, 8, 1, 9, 2], MinOrder);
        assert_eq!(heap.into_sorted_vec(), vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_into_vec() {
        let heap = Heap::build(vec![1, 2, 3, 4], MaxOrder);
        let items = heap.into_vec();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], 4);
    }

    #[test]
    fn test_debug() {
        let heap = Heap::build(vec![1], MaxOrder);
        assert_eq!(format!("{:?}", heap), "Heap { items: [1] }");
    }
}
