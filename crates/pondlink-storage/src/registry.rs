use crate::error::RegistryError;
use crate::store::LinkStore;
use parking_lot::RwLock;
use pondlink_generator::{Allocator, Identifier, SeqAllocator};
use tracing::{debug, trace, warn};

/// Concurrent id to link registry with a fixed capacity.
///
/// Lookups share a read lock and run in parallel; an insert holds the write
/// lock only for the single store mutation. Identifiers come from the
/// allocator before the lock is taken, so allocation never waits on readers.
///
/// Between allocation and insertion an identifier exists but is not yet
/// visible; lookups during that window see it as not found.
#[derive(Debug)]
pub struct LinkRegistry<S, A = SeqAllocator> {
    store: RwLock<S>,
    allocator: A,
    capacity: u64,
}

impl<S: LinkStore> LinkRegistry<S> {
    /// Creates a registry over `store` with a fresh sequential allocator.
    /// The capacity is the store's.
    pub fn new(store: S) -> Self {
        Self::with_allocator(store, SeqAllocator::new())
    }
}

impl<S: LinkStore, A: Allocator> LinkRegistry<S, A> {
    pub fn with_allocator(store: S, allocator: A) -> Self {
        let capacity = store.capacity() as u64;
        Self {
            store: RwLock::new(store),
            allocator,
            capacity,
        }
    }

    /// Allocates an identifier and stores `link` under it.
    ///
    /// An identifier at or past the capacity is consumed and then refused
    /// with [`RegistryError::CapacityExceeded`]. Identifiers are never
    /// reused, so once full the registry rejects every further insert.
    pub fn reserve_and_insert(&self, link: impl Into<String>) -> Result<Identifier, RegistryError> {
        let id = self.allocator.next_id();
        if id >= self.capacity {
            warn!(id, capacity = self.capacity, "registry is full");
            return Err(RegistryError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let link = link.into();
        self.store.write().insert(id, link)?;

        debug!(id, "registered link");
        Ok(id)
    }

    /// Returns a copy of the link stored under `id`, or `None` if there is
    /// no such entry (yet).
    pub fn lookup(&self, id: Identifier) -> Option<String> {
        let link = self.store.read().find(id).map(str::to_owned);
        if link.is_none() {
            trace!(id, "identifier not found");
        }
        link
    }

    /// Number of visible entries.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of identifiers handed out so far, including refused ones.
    pub fn allocated(&self) -> u64 {
        self.allocator.peek()
    }
}
