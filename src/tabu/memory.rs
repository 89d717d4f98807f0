//! Time-windowed tabu memory.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::local_search::{Move, MoveKind};

/// Heap key: `(expiration, kind, low position, high position)`.
type ExpiryKey = (usize, MoveKind, usize, usize);

/// Short-term memory of recently applied moves.
///
/// A move added at iteration `t` stays tabu for every iteration `t'` with
/// `t <= t' < t + tenure`. Lookups treat `(i, j)` and `(j, i)` as the same
/// move.
///
/// Expirations live in a min-heap, so pruning stays correct when the tenure
/// changes mid-run and entries stop arriving in expiration order. Queries
/// are expected to use non-decreasing iteration numbers.
///
/// # Examples
///
/// ```
/// use tsp_tabu::local_search::Move;
/// use tsp_tabu::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(3);
/// memory.add(Move::two_opt(1, 4), 10);
/// assert!(memory.is_tabu(&Move::two_opt(4, 1), 12));
/// assert!(!memory.is_tabu(&Move::two_opt(1, 4), 13));
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    tenure: usize,
    // Latest expiration per move.
    active: HashMap<Move, usize>,
    expiry: BinaryHeap<Reverse<ExpiryKey>>,
}

impl TabuMemory {
    /// Creates an empty memory. The tenure is clamped to at least 1.
    pub fn new(tenure: usize) -> Self {
        Self {
            tenure: tenure.max(1),
            active: HashMap::new(),
            expiry: BinaryHeap::new(),
        }
    }

    /// Current tenure applied to newly added moves.
    pub fn tenure(&self) -> usize {
        self.tenure
    }

    /// Changes the tenure for subsequent [`add`](Self::add) calls.
    ///
    /// Stored expirations are left untouched.
    pub fn set_tenure(&mut self, tenure: usize) {
        self.tenure = tenure.max(1);
    }

    /// Records `mv` as tabu until iteration `iteration + tenure`.
    ///
    /// The expiration saturates at `usize::MAX`, which never expires.
    pub fn add(&mut self, mv: Move, iteration: usize) {
        let expiration = iteration.saturating_add(self.tenure);
        let (low, high) = mv.normalized();
        self.expiry
            .push(Reverse((expiration, mv.kind(), low, high)));
        let entry = self.active.entry(mv).or_insert(expiration);
        *entry = (*entry).max(expiration);
    }

    /// Drops every entry whose expiration is at or before `iteration`.
    pub fn prune(&mut self, iteration: usize) {
        while let Some(&Reverse((expiration, kind, low, high))) = self.expiry.peek() {
            if expiration > iteration {
                break;
            }
            self.expiry.pop();
            let mv = Move::new(kind, low, high);
            // A later re-add keeps the move alive under a newer expiration.
            if self.active.get(&mv) == Some(&expiration) {
                self.active.remove(&mv);
            }
        }
    }

    /// Prunes expired entries, then reports whether `mv` is still tabu.
    pub fn is_tabu(&mut self, mv: &Move, iteration: usize) -> bool {
        self.prune(iteration);
        self.active.contains_key(mv)
    }

    /// Number of distinct moves currently held.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if no move is held.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.active.clear();
        self.expiry.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_window() {
        let mut memory = TabuMemory::new(4);
        let mv = Move::two_opt(2, 6);
        memory.add(mv, 5);
        for t in 5..9 {
            assert!(memory.is_tabu(&mv, t), "should be tabu at {t}");
        }
        assert!(!memory.is_tabu(&mv, 9));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_symmetric_lookup() {
        let mut memory = TabuMemory::new(5);
        memory.add(Move::two_opt(3, 1), 0);
        assert!(memory.is_tabu(&Move::two_opt(1, 3), 1));
        assert!(memory.is_tabu(&Move::two_opt(3, 1), 1));
    }

    #[test]
    fn test_kinds_are_distinct() {
        let mut memory = TabuMemory::new(5);
        memory.add(Move::two_opt(1, 3), 0);
        assert!(!memory.is_tabu(&Move::swap(1, 3), 1));
    }

    #[test]
    fn test_tenure_clamped() {
        let mut memory = TabuMemory::new(0);
        assert_eq!(memory.tenure(), 1);
        memory.set_tenure(0);
        assert_eq!(memory.tenure(), 1);
    }

    #[test]
    fn test_set_tenure_not_retroactive() {
        let mut memory = TabuMemory::new(10);
        let old = Move::two_opt(0, 2);
        memory.add(old, 0);
        memory.set_tenure(2);
        let new = Move::two_opt(1, 3);
        memory.add(new, 1);
        // The short-lived entry expires first even though it was added last.
        assert!(!memory.is_tabu(&new, 3));
        assert!(memory.is_tabu(&old, 3));
        assert!(memory.is_tabu(&old, 9));
        assert!(!memory.is_tabu(&old, 10));
    }

    #[test]
    fn test_readd_extends_window() {
        let mut memory = TabuMemory::new(3);
        let mv = Move::swap(0, 4);
        memory.add(mv, 0);
        memory.add(mv, 2);
        assert_eq!(memory.len(), 1);
        // The first entry expires at 3 but the second keeps the move alive.
        assert!(memory.is_tabu(&mv, 3));
        assert!(memory.is_tabu(&mv, 4));
        assert!(!memory.is_tabu(&mv, 5));
    }

    #[test]
    fn test_shorter_readd_keeps_longer_window() {
        let mut memory = TabuMemory::new(8);
        let mv = Move::two_opt(1, 5);
        memory.add(mv, 0);
        memory.set_tenure(1);
        memory.add(mv, 1);
        assert!(memory.is_tabu(&mv, 2));
        assert!(memory.is_tabu(&mv, 7));
        assert!(!memory.is_tabu(&mv, 8));
    }

    #[test]
    fn test_huge_tenure_saturates() {
        let mut memory = TabuMemory::new(usize::MAX);
        let mv = Move::two_opt(0, 2);
        memory.add(mv, 1);
        assert!(memory.is_tabu(&mv, 1));
        assert!(memory.is_tabu(&mv, 2));
        assert!(memory.is_tabu(&mv, usize::MAX - 1));
    }

    #[test]
    fn test_clear() {
        let mut memory = TabuMemory::new(5);
        memory.add(Move::two_opt(0, 2), 0);
        memory.add(Move::two_opt(1, 3), 0);
        assert_eq!(memory.len(), 2);
        memory.clear();
        assert!(memory.is_empty());
        assert!(!memory.is_tabu(&Move::two_opt(0, 2), 1));
    }
}
