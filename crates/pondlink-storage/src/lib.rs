//! Link storage: the backing store contract and the concurrent registry
//! that hands out identifiers and owns the id to link mapping.

pub mod error;
pub mod hash;
pub mod registry;
pub mod slots;
pub mod store;

pub use error::{RegistryError, StorageError};
pub use hash::HashStore;
pub use registry::LinkRegistry;
pub use slots::SlotStore;
pub use store::LinkStore;
