// sequence.rs

use crate::error::{MapError, Result};

/// Wrapping cursor over the attribute list.
///
/// With zero attributes there is no valid position: [`current`] is `None` and
/// the step commands do nothing.
///
/// [`current`]: SequenceIndex::current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequenceIndex {
    index: usize,
    len: usize,
}

impl SequenceIndex {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Upper bound for a slider over this sequence.
    pub fn max(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn advance(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.current()
    }

    pub fn retreat(&mut self) -> Option<usize> {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.current()
    }

    /// Jumps straight to `index`, e.g. from a slider drag. Out-of-range input
    /// leaves the cursor where it was.
    pub fn set_index(&mut self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(MapError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SequenceIndex::new(10).current(), Some(0));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut seq = SequenceIndex::new(10);
        for _ in 0..10 {
            seq.advance();
        }
        assert_eq!(seq.current(), Some(0));
    }

    #[test]
    fn wraps_both_ways() {
        let mut seq = SequenceIndex::new(10);
        assert_eq!(seq.retreat(), Some(9));
        assert_eq!(seq.advance(), Some(0));
    }

    #[test]
    fn set_then_advance() {
        let mut seq = SequenceIndex::new(10);
        assert_eq!(seq.set_index(5).unwrap(), 5);
        assert_eq!(seq.advance(), Some(6));
    }

    #[test]
    fn out_of_range_set_is_rejected() {
        let mut seq = SequenceIndex::new(10);
        seq.set_index(3).unwrap();
        assert!(matches!(
            seq.set_index(10),
            Err(MapError::IndexOutOfRange { index: 10, len: 10 })
        ));
        assert_eq!(seq.current(), Some(3));
    }

    #[test]
    fn empty_sequence_has_no_position() {
        let mut seq = SequenceIndex::new(0);
        assert_eq!(seq.current(), None);
        assert_eq!(seq.max(), None);
        assert_eq!(seq.advance(), None);
        assert_eq!(seq.retreat(), None);
        assert!(seq.set_index(0).is_err());
    }

    #[test]
    fn slider_max_is_last_index() {
        assert_eq!(SequenceIndex::new(10).max(), Some(9));
        assert_eq!(SequenceIndex::new(1).max(), Some(0));
    }

    #[test]
    fn single_attribute_stays_put() {
        let mut seq = SequenceIndex::new(1);
        assert_eq!(seq.advance(), Some(0));
        assert_eq!(seq.retreat(), Some(0));
    }
}
