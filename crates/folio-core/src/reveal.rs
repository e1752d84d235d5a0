//! Character-by-character reveal sequence.

use std::iter::FusedIterator;

/// Finite sequence of the left-to-right prefixes of a target string.
///
/// Yields exactly one item per character of the target, each one character
/// longer than the last, then ends for good. Prefixes always fall on
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSequence {
    target: String,
    /// Byte offset of the end of the revealed prefix.
    end: usize,
    revealed: usize,
    total: usize,
}

impl RevealSequence {
    /// Create a sequence with nothing revealed yet.
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let total = target.chars().count();
        Self {
            target,
            end: 0,
            revealed: 0,
            total,
        }
    }

    /// The full string being revealed.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The currently revealed prefix.
    pub fn revealed(&self) -> &str {
        &self.target[..self.end]
    }

    /// Number of characters revealed so far.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Total number of characters in the target.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Whether the target has no characters.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether every character has been revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed == self.total
    }
}

impl Iterator for RevealSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.target[self.end..].chars().next()?;
        self.end += c.len_utf8();
        self.revealed += 1;
        Some(self.revealed().to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.revealed;
        (remaining, Some(remaining))
    }
}

impl FusedIterator for RevealSequence {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_in_order() {
        let prefixes: Vec<String> = RevealSequence::new("Mansi").collect();
        assert_eq!(prefixes, ["M", "Ma", "Man", "Mans", "Mansi"]);
    }

    #[test]
    fn test_exact_length_then_fused() {
        let mut seq = RevealSequence::new("Mansi Gangani");
        assert_eq!(seq.len(), 13);
        assert_eq!(seq.by_ref().count(), 13);
        assert!(seq.is_complete());
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.revealed(), "Mansi Gangani");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut seq = RevealSequence::new("né✓");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.next().as_deref(), Some("n"));
        assert_eq!(seq.next().as_deref(), Some("né"));
        assert_eq!(seq.next().as_deref(), Some("né✓"));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_empty_target() {
        let mut seq = RevealSequence::new("");
        assert!(seq.is_empty());
        assert!(seq.is_complete());
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let mut seq = RevealSequence::new("abc");
        seq.next();
        assert_eq!(seq.size_hint(), (2, Some(2)));
        assert_eq!(seq.revealed_len(), 1);
    }
}
