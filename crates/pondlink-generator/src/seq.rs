use crate::{Allocator, Identifier};
use std::sync::atomic::{AtomicU64, Ordering};

/// A lock-free sequential allocator.
///
/// Identifiers start at 0 and increase by one per call, in the global order
/// of the underlying atomic increments. Nothing is ever recycled.
///
/// The counter wraps after `u64::MAX` calls; callers bound the total number
/// of allocations well below that (the registry does so through its
/// capacity).
#[derive(Debug, Default)]
pub struct SeqAllocator {
    counter: AtomicU64,
}

impl SeqAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Allocator for SeqAllocator {
    fn next_id(&self) -> Identifier {
        self.counter.fetch_add(1, Ordering::SeqCst)
    }

    fn peek(&self) -> Identifier {
        self.counter.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn starts_at_zero_and_counts_up() {
        let allocator = SeqAllocator::new();

        assert_eq!(allocator.next_id(), 0);
        assert_eq!(allocator.next_id(), 1);
        assert_eq!(allocator.next_id(), 2);
    }

    #[test]
    fn peek_does_not_consume() {
        let allocator = SeqAllocator::new();
        allocator.next_id();

        assert_eq!(allocator.peek(), 1);
        assert_eq!(allocator.peek(), 1);
        assert_eq!(allocator.next_id(), 1);
    }

    #[test]
    fn allocator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqAllocator>();
    }

    #[test]
    fn concurrent_callers_never_share_an_id() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 1_000;

        let allocator = SeqAllocator::new();
        let ids: Vec<Identifier> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        (0..PER_THREAD)
                            .map(|_| allocator.next_id())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), THREADS * PER_THREAD);
        assert_eq!(unique.iter().max(), Some(&((THREADS * PER_THREAD - 1) as u64)));
        assert_eq!(allocator.peek(), (THREADS * PER_THREAD) as u64);
    }
}
