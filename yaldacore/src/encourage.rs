//! Encouragement phrases for the "get encouragement" button.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The fixed phrase list.
pub const PHRASES: [&str; 6] = [
    "You're doing great!",
    "Keep up the good work!",
    "You've got this!",
    "Believe in yourself!",
    "You're making progress!",
    "It's worth a shot!",
];

/// Picks one phrase uniformly at random on each trigger.
pub struct EncouragementPicker {
    phrases: &'static [&'static str],
    rng: StdRng,
}

impl Default for EncouragementPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl EncouragementPicker {
    pub fn new() -> Self {
        Self {
            phrases: &PHRASES,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic picker for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            phrases: &PHRASES,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker over a custom phrase list. `phrases` must be non-empty.
    pub fn with_phrases(phrases: &'static [&'static str], seed: u64) -> Self {
        assert!(!phrases.is_empty());
        Self {
            phrases,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn pick(&mut self) -> &'static str {
        self.phrases[self.rng.gen_range(0..self.phrases.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_comes_from_list() {
        let mut picker = EncouragementPicker::new();
        for _ in 0..100 {
            assert!(PHRASES.contains(&picker.pick()));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let mut a = EncouragementPicker::with_seed(11);
        let mut b = EncouragementPicker::with_seed(11);
        for _ in 0..20 {
            assert_eq!(a.pick(), b.pick());
        }
    }

    #[test]
    fn test_single_phrase_list_always_picked() {
        static ONE: [&str; 1] = ["You've got this!"];
        let mut picker = EncouragementPicker::with_phrases(&ONE, 0);
        for _ in 0..10 {
            assert_eq!(picker.pick(), "You've got this!");
        }
    }
}
