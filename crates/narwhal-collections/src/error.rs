use crate::priority_queue::ItemHandle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("priority queue has already been initialized")]
    HeapAlreadyInitialized,

    #[error("priority queue does not contain item {handle:?}")]
    UnknownHandle { handle: ItemHandle },

    #[error("union-find does not contain the requested element")]
    UnknownElement,
}

pub type Result<T> = std::result::Result<T, Error>;
