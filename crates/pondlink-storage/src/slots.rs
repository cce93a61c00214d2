use crate::error::{Result, StorageError};
use crate::store::LinkStore;
use pondlink_generator::Identifier;

/// Dense store indexed directly by identifier.
///
/// Sequential allocation fills `[0, capacity)` without gaps, so a vector of
/// slots needs no hashing at all. The vector grows on demand up to the
/// highest identifier seen; identifiers at or past the capacity are refused.
#[derive(Debug, Clone, Default)]
pub struct SlotStore {
    slots: Vec<Option<String>>,
    len: usize,
    capacity: usize,
}

impl SlotStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            capacity,
        }
    }

    fn index(&self, id: Identifier) -> Option<usize> {
        usize::try_from(id)
            .ok()
            .filter(|&index| index < self.capacity)
    }
}

impl LinkStore for SlotStore {
    fn insert(&mut self, id: Identifier, link: String) -> Result<()> {
        let Some(index) = self.index(id) else {
            return Err(StorageError::Full {
                capacity: self.capacity,
            });
        };

        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }

        let slot = &mut self.slots[index];
        if slot.is_some() {
            return Err(StorageError::Conflict(id));
        }
        *slot = Some(link);
        self.len += 1;
        Ok(())
    }

    fn find(&self, id: Identifier) -> Option<&str> {
        self.slots.get(self.index(id)?)?.as_deref()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
