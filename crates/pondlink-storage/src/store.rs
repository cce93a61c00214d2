use crate::error::Result;
use pondlink_generator::Identifier;

/// A fixed-capacity associative container from identifiers to links.
///
/// Stores are not synchronized themselves; [`LinkRegistry`](crate::LinkRegistry)
/// wraps them in a reader/writer lock. Entries are never updated or removed
/// once inserted.
pub trait LinkStore: Send + Sync + 'static {
    /// Inserts a new entry.
    ///
    /// Returns `Err(Conflict)` if `id` is already present and `Err(Full)` if
    /// the store cannot take another entry.
    fn insert(&mut self, id: Identifier, link: String) -> Result<()>;

    /// Retrieves the link stored under `id`, if any.
    fn find(&self, id: Identifier) -> Option<&str>;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;
}
