//! One-shot visibility latches.
//!
//! Each animated unit on the page reveals itself the first time it scrolls
//! into view and then stays revealed.

use std::collections::HashMap;
use std::hash::Hash;

/// Latch that trips on the first visible observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    revealed: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation. Returns `true` only for the transition into
    /// the revealed state.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// One latch per keyed element.
#[derive(Debug, Clone)]
pub struct VisibilitySet<K> {
    latches: HashMap<K, VisibilityLatch>,
}

impl<K> Default for VisibilitySet<K> {
    fn default() -> Self {
        Self {
            latches: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> VisibilitySet<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation for `key`. Returns `true` on its first reveal.
    pub fn observe(&mut self, key: K, visible: bool) -> bool {
        self.latches.entry(key).or_default().observe(visible)
    }

    /// Whether `key` has ever been seen.
    pub fn is_revealed(&self, key: &K) -> bool {
        self.latches.get(key).is_some_and(VisibilityLatch::is_revealed)
    }

    /// Number of elements revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.latches.values().filter(|l| l.is_revealed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_trips_once() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        // Scrolling back out does not hide it again
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_set_tracks_keys_independently() {
        let mut set = VisibilitySet::new();
        assert!(set.observe("about", true));
        assert!(!set.observe("skills", false));
        assert!(set.is_revealed(&"about"));
        assert!(!set.is_revealed(&"skills"));
        assert!(!set.is_revealed(&"contact"));
        assert!(set.observe("skills", true));
        assert_eq!(set.revealed_count(), 2);
    }
}
