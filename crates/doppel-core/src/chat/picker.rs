//! Choosing which canned reply the twin sends.

use rand::Rng;

/// Picks an index into a list of `len` candidate replies.
///
/// Implementations may return any value; callers reduce it modulo `len`.
pub trait ResponsePicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniformly random choice, used by the running app.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Always the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}

/// Walks the list in order, wrapping around.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequencePicker {
    next: usize,
}

impl ResponsePicker for SequencePicker {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.next;
        self.next = if len == 0 { 0 } else { (index + 1) % len };
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_in_range() {
        let mut picker = RandomPicker;
        for _ in 0..100 {
            assert!(picker.pick(4) < 4);
        }
        assert_eq!(picker.pick(0), 0);
    }

    #[test]
    fn test_sequence_wraps() {
        let mut picker = SequencePicker::default();
        let picks: Vec<usize> = (0..5).map(|_| picker.pick(3)).collect();
        assert_eq!(picks, vec![0, 1, 2, 0, 1]);
    }
}
