//! Ordered flip record storage and identifier allocation.

use super::Flip;

/// Append-only store of flip records in insertion order.
///
/// The id allocator is derived state: seeded once from the maximum existing
/// id at construction, bumped on every create, never recomputed by scanning.
/// Ids are never reused.
#[derive(Debug, Default)]
pub struct FlipStore {
    flips: Vec<Flip>,
    last_id: u64,
}

impl FlipStore {
    /// Create an empty store; the first created flip gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pre-existing records, deriving the allocator from
    /// the maximum seeded id (0 when empty).
    pub fn from_seed(flips: Vec<Flip>) -> Self {
        let last_id = flips.iter().map(|f| f.id).max().unwrap_or(0);
        Self { flips, last_id }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Flip] {
        &self.flips
    }

    /// Look up one record by id.
    pub fn get_by_id(&self, id: u64) -> Option<&Flip> {
        self.flips.iter().find(|f| f.id == id)
    }

    /// Append a new flip with the next id and return it.
    ///
    /// The caller guarantees `result` is non-empty; once that holds, creation
    /// cannot fail. The store is append-only: no update, no deletion.
    pub fn create(&mut self, result: &str) -> Flip {
        debug_assert!(!result.is_empty());

        self.last_id += 1;
        let flip = Flip {
            id: self.last_id,
            result: result.to_string(),
        };
        self.flips.push(flip.clone());
        flip
    }
}
