use crate::error::{Result, StorageError};
use crate::store::LinkStore;
use pondlink_generator::Identifier;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Hash map backed store, preallocated for its full capacity.
///
/// Works for any identifier distribution, at the cost of reserving the whole
/// table up front.
#[derive(Debug, Clone)]
pub struct HashStore {
    entries: HashMap<Identifier, String>,
    capacity: usize,
}

impl HashStore {
    /// Creates an empty store that holds at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
        }
    }
}

impl LinkStore for HashStore {
    fn insert(&mut self, id: Identifier, link: String) -> Result<()> {
        let full = self.entries.len() >= self.capacity;

        match self.entries.entry(id) {
            Entry::Occupied(_) => Err(StorageError::Conflict(id)),
            Entry::Vacant(_) if full => Err(StorageError::Full {
                capacity: self.capacity,
            }),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(())
            }
        }
    }

    fn find(&self, id: Identifier) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
