pub(crate) use crate::error::{Error, Result};
pub(crate) use crate::heap::Heap;
pub(crate) use crate::order::{Comparator, MaxOrder, MinOrder};
pub(crate) use crate::sort::sort_heap;
pub(crate) use crate::task::{HighestFirst, Task};
pub(crate) use crate::util::sift::{heapify, is_heap, sift_down, sift_up};
