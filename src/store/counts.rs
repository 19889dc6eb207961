//! Tally storage keyed by result label.

use std::collections::BTreeMap;

/// Mapping from result label to the number of flips with that result.
///
/// The key set is fixed at seeding time: `increment` never creates a key, so
/// a label that was not seeded stays invisible to every operation.
#[derive(Debug, Default)]
pub struct CountStore {
    tallies: BTreeMap<String, u64>,
}

impl CountStore {
    /// Build a store from seeded tallies.
    pub fn from_seed(tallies: BTreeMap<String, u64>) -> Self {
        Self { tallies }
    }

    /// The full label → tally mapping, ordered by label.
    pub fn all(&self) -> &BTreeMap<String, u64> {
        &self.tallies
    }

    /// Tally for one label, or `None` if the label was never seeded.
    pub fn get(&self, label: &str) -> Option<u64> {
        self.tallies.get(label).copied()
    }

    /// Whether the label was seeded.
    pub fn contains(&self, label: &str) -> bool {
        self.tallies.contains_key(label)
    }

    /// Bump the tally for an existing label and return the new value.
    ///
    /// Returns `None` without mutating anything when the label is absent;
    /// cross-store validation is the orchestration layer's job, not ours.
    pub fn increment(&mut self, label: &str) -> Option<u64> {
        let tally = self.tallies.get_mut(label)?;
        *tally += 1;
        Some(*tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CountStore {
        CountStore::from_seed(BTreeMap::from([
            ("heads".to_string(), 5),
            ("tails".to_string(), 3),
        ]))
    }

    #[test]
    fn test_get_seeded_and_missing() {
        let store = seeded();
        assert_eq!(store.get("heads"), Some(5));
        assert_eq!(store.get("sideways"), None);
    }

    #[test]
    fn test_increment_returns_new_tally() {
        let mut store = seeded();
        assert_eq!(store.increment("tails"), Some(4));
        assert_eq!(store.get("tails"), Some(4));
    }

    #[test]
    fn test_increment_never_creates_keys() {
        let mut store = seeded();
        assert_eq!(store.increment("sideways"), None);
        assert!(!store.contains("sideways"));
        assert_eq!(store.all().len(), 2);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let store = seeded();
        assert_eq!(store.all(), store.all());
        assert_eq!(store.get("heads"), store.get("heads"));
    }
}
