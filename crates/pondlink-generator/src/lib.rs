//! Identifier allocation for the link registry.

pub mod seq;

pub use seq::SeqAllocator;

/// Numeric name of a registry entry.
pub type Identifier = u64;

/// Trait for handing out link identifiers.
///
/// Implementations are pure allocators that don't interact with storage.
/// Every call to [`next_id`](Allocator::next_id) must return a value no other
/// call on the same allocator has returned, even under concurrent use.
pub trait Allocator: Send + Sync + 'static {
    /// Consumes and returns the next identifier.
    fn next_id(&self) -> Identifier;

    /// Returns the identifier the next call to `next_id` would produce,
    /// without consuming it.
    fn peek(&self) -> Identifier;
}
