use pondlink_generator::Identifier;
use thiserror::Error;

/// Result type for backing store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("identifier already stored: {0}")]
    Conflict(Identifier),
    #[error("store is full: capacity is {capacity} entries")]
    Full { capacity: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("registry capacity of {capacity} links exceeded")]
    CapacityExceeded { capacity: u64 },
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
