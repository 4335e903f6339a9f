//! Identifier generation for new entities.

use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// Produces opaque, unique identifiers for newly created entities.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Time-ordered UUIDv7 identifiers (the production generator).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn generate(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Replays a fixed list of identifiers, wrapping around when exhausted.
///
/// Deterministic ids make collision paths reachable in tests.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    ids: Vec<Uuid>,
    next: AtomicUsize,
}

impl SequenceIdGenerator {
    /// # Panics
    /// Panics if `ids` is empty.
    pub fn new(ids: Vec<Uuid>) -> Self {
        assert!(!ids.is_empty(), "SequenceIdGenerator needs at least one id");
        Self {
            ids,
            next: AtomicUsize::new(0),
        }
    }

    /// A generator that hands out the same id forever.
    pub fn repeating(id: Uuid) -> Self {
        Self::new(vec![id])
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> Uuid {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.ids.len();
        self.ids[index]
    }
}
