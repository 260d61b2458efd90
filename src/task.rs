use crate::prelude::*;
use std::cmp::Ordering;

/// A payload queued with a priority.
///
/// `order` is the creation marker handed out by the owning queue:
/// unique within that queue, and increasing with insertion.
/// Only the priority ever changes, through
/// [`PriorityQueue::update`](crate::PriorityQueue::update).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task<T> {
    priority: i64,
    order: u64,
    payload: T,
}

impl<T> Task<T> {
    pub(crate) fn new(priority: i64, order: u64, payload: T) -> Self {
        Self {
            priority,
            order,
            payload,
        }
    }

    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }

    pub(crate) fn set_priority(&mut self, priority: i64) {
        self.priority = priority;
    }
}

/// Highest priority first, then oldest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct HighestFirst;

impl<T> Comparator<Task<T>> for HighestFirst {
    fn compare(&self, left: &Task<T>, right: &Task<T>) -> Ordering {
        left.priority
            .cmp(&right.priority)
            .then_with(|| right.order.cmp(&left.order))
    }
}

/// Lowest priority first, then oldest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowestFirst;

impl<T> Comparator<Task<T>> for LowestFirst {
    fn compare(&self, left: &Task<T>, right: &Task<T>) -> Ordering {
        right
            .priority
            .cmp(&left.priority)
            .then_with(|| right.order.cmp(&left.order))
    }
}
