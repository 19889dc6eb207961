//! In-memory resource stores.
//!
//! # Data Flow
//! ```text
//! seed config
//!     → flips.rs (ordered records + id allocator)
//!     → counts.rs (result label → tally)
//!     → Stores (one container, shared behind one lock)
//! ```
//!
//! # Design Decisions
//! - Both stores live in a single container so a flip append and its count
//!   increment can commit inside the same exclusive-lock region
//! - State is process-local and volatile; a restart resets it to the seed

pub mod counts;
pub mod flips;

use serde::{Deserialize, Serialize};

use crate::config::schema::SeedConfig;

pub use counts::CountStore;
pub use flips::FlipStore;

/// One recorded coin-flip outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flip {
    /// Positive, unique, monotonically assigned identifier.
    pub id: u64,

    /// Outcome label; opaque to the store beyond being non-empty.
    pub result: String,
}

/// The two stores, owned together so writes spanning both stay atomic.
#[derive(Debug, Default)]
pub struct Stores {
    pub flips: FlipStore,
    pub counts: CountStore,
}

impl Stores {
    /// Build both stores from the startup seed dataset.
    pub fn from_seed(seed: &SeedConfig) -> Self {
        let flips = seed
            .flips
            .iter()
            .map(|f| Flip {
                id: f.id,
                result: f.result.clone(),
            })
            .collect();

        Self {
            flips: FlipStore::from_seed(flips),
            counts: CountStore::from_seed(seed.counts.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::FlipSeed;

    #[test]
    fn test_from_seed_wires_both_stores() {
        let mut seed = SeedConfig::default();
        seed.counts.insert("heads".to_string(), 2);
        seed.flips = vec![
            FlipSeed {
                id: 3,
                result: "heads".to_string(),
            },
            FlipSeed {
                id: 7,
                result: "heads".to_string(),
            },
        ];

        let stores = Stores::from_seed(&seed);
        assert_eq!(stores.flips.list_all().len(), 2);
        assert_eq!(stores.counts.get("heads"), Some(2));
    }
}
