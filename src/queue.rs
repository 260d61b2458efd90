use crate::prelude::*;
use log::trace;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicU64, Ordering::Relaxed};

/// Priority queue of [`Task`]s over a shared [`Heap`].
///
/// Tasks are found by payload equality. Lookup is a linear scan, and
/// with duplicate payloads only the first task in heap order is found.
pub struct PriorityQueue<T, C = HighestFirst> {
    heap: Heap<Task<T>, C>,
    clock: AtomicU64,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new(HighestFirst)
    }
}

impl<T, C: Comparator<Task<T>>> PriorityQueue<T, C> {
    pub fn new(order: C) -> Self {
        let heap = Heap::new(order);
        let clock = AtomicU64::new(0);
        Self { heap, clock }
    }

    pub fn insert(&self, payload: T, priority: i64) {
        let order = self.clock.fetch_add(1, Relaxed);
        self.heap.insert(Task::new(priority, order, payload));
    }

    pub fn pop(&self) -> Result<Task<T>> {
        self.heap.pop().map_err(|_| Error::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, payload: &T) -> bool
    where
        T: PartialEq,
    {
        self.heap
            .inspect(|tasks| tasks.iter().any(|task| task.payload() == payload))
    }

    /// Change the priority of the first task carrying `payload`.
    ///
    /// The scan, the change and the re-sift happen under one write lock.
    /// Which way the task moves is decided by the queue's comparator, so
    /// this works for any ordering, not only highest-first.
    ///
    /// The task is cloned before the change, payload included, so an
    /// update costs one clone of `T`. Use a cheap payload (an id or an
    /// `Arc`) when updates are frequent.
    pub fn update(&self, payload: &T, priority: i64) -> Result<()>
    where
        T: PartialEq + Clone,
    {
        self.heap.modify(|tasks, order| -> Result<()> {
            let slot = tasks
                .iter()
                .position(|task| task.payload() == payload)
                .ok_or(Error::ItemNotFound)?;
            if tasks[slot].priority() == priority {
                return Ok(());
            }

            let previous = tasks[slot].clone();
            tasks[slot].set_priority(priority);
            match order.compare(&tasks[slot], &previous) {
                Ordering::Greater => {
                    let rest = sift_up(tasks, slot, order);
                    trace!("raised task from slot {} to {}", slot, rest);
                }
                Ordering::Less => {
                    let len = tasks.len();
                    let rest = sift_down(tasks, slot, len, order);
                    trace!("lowered task from slot {} to {}", slot, rest);
                }
                Ordering::Equal => {}
            }
            Ok(())
        })
    }
}

impl<T: Clone, C: Comparator<Task<T>>> PriorityQueue<T, C> {
    pub fn peek(&self) -> Result<Task<T>> {
        self.heap.peek().map_err(|_| Error::EmptyQueue)
    }

    /// An owned snapshot of the queued tasks, in heap order.
    pub fn tasks(&self) -> Vec<Task<T>> {
        self.heap.items()
    }
}
