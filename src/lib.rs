//! # heapqueue
//!
//! A binary heap and a priority queue built on it, both safe to share
//! between threads.
//!
//! - [`Heap`]: array-backed heap ordered by an injected [`Comparator`]
//! - [`PriorityQueue`]: heap of [`Task`]s with in-place priority updates
//! - [`heap_sort`], [`sort_slice`]: O(n log n) in-place heap sort
//!
//! ```
//! use heapqueue::{Heap, MaxOrder, PriorityQueue};
//!
//! let heap = Heap::build(vec![10, 30, 20, 40, 50], MaxOrder);
//! assert_eq!(heap.pop(), Ok(50));
//!
//! let queue: PriorityQueue<&str> = PriorityQueue::default();
//! queue.insert("A", 10);
//! queue.insert("B", 20);
//! queue.update(&"A", 30).unwrap();
//! assert_eq!(queue.pop().unwrap().into_payload(), "A");
//! ```

mod error;
mod heap;
mod order;
mod prelude;
mod queue;
mod sort;
mod task;
mod util;

pub use error::{Error, Result};
pub use heap::Heap;
pub use order::{Comparator, MaxOrder, MinOrder};
pub use queue::PriorityQueue;
pub use sort::{heap_sort, sort_slice};
pub use task::{HighestFirst, LowestFirst, Task};
