use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    EmptyHeap,
    EmptyQueue,
    ItemNotFound,
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyHeap => write!(f, "heap is empty"),
            Self::EmptyQueue => write!(f, "queue is empty"),
            Self::ItemNotFound => write!(f, "item not found"),
            Self::OutOfRange { index, len } => write!(
                f,
                "index {} out of range for heap of length {}",
                index, len
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
