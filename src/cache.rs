// Decision cache
//
// Memoizes the best result found for a previously-seen position so a repeat
// decision request short-circuits the whole recursive search. Keying is
// exact structural equality on the position; there is no partial matching.
// The cache is owned by one engine instance, never module-level state, so
// independent games cannot cross-contaminate results.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::types::JointMove;

/// Cached outcome of one fully completed search.
#[derive(Debug, Clone)]
pub struct CacheEntry<M> {
    /// Team score of the best line.
    pub score: f64,
    /// Every joint assignment tied for the best score. The tie-break is
    /// re-run on each hit, so repeated requests may legitimately pick
    /// different members of this set.
    pub candidates: Vec<JointMove<M>>,
    /// Whether the best line reached an actual end of the game.
    pub reached_end: bool,
}

/// Position-keyed memo table, synchronized for concurrent searches.
///
/// Duplicate concurrent misses for the same position are tolerable: a
/// recompute simply overwrites with an equally valid result.
pub struct DecisionCache<P, M> {
    entries: Mutex<HashMap<P, CacheEntry<M>>>,
}

impl<P: Eq + Hash, M: Clone> DecisionCache<P, M> {
    pub fn new() -> Self {
        DecisionCache {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the memoized result for an exact position match, if any.
    pub fn lookup(&self, position: &P) -> Option<CacheEntry<M>> {
        self.entries.lock().get(position).cloned()
    }

    /// Stores a fully computed result. Only complete results are ever
    /// stored, so an aborted search cannot leave the cache inconsistent.
    pub fn store(&self, position: P, entry: CacheEntry<M>) {
        self.entries.lock().insert(position, entry);
    }

    /// Drops every entry. Positions are game-specific, so this belongs
    /// between independent games.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<P: Eq + Hash, M: Clone> Default for DecisionCache<P, M> {
    fn default() -> Self {
        Self::new()
    }
}
