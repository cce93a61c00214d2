use pondlink_core::CodecError;
use pondlink_storage::{RegistryError, StorageError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("invalid link: {0}")]
    InvalidLink(String),
    #[error("link capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: u64 },
    #[error("invalid token: {0}")]
    InvalidToken(#[from] CodecError),
    #[error("no link for token {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<RegistryError> for ShortenerError {
    fn from(value: RegistryError) -> Self {
        match value {
            RegistryError::CapacityExceeded { capacity } => Self::CapacityExceeded { capacity },
            RegistryError::Storage(source) => Self::Storage(source),
        }
    }
}
