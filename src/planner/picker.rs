//! Choice among equally eligible observance ideas.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Chooses one idea out of the eligible ones for an observance slot.
///
/// Implementations must return one of the given ideas, or `None` to pass on
/// the observance.
pub trait IdeaPicker {
    fn pick<'a>(&mut self, eligible: &[&'a str]) -> Option<&'a str>;
}

/// Always takes the first eligible idea in catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEligible;

impl IdeaPicker for FirstEligible {
    fn pick<'a>(&mut self, eligible: &[&'a str]) -> Option<&'a str> {
        eligible.first().copied()
    }
}

/// Uniform random choice, for variety across runs.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Reproducible picker: the same seed always yields the same choices.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> IdeaPicker for RandomPicker<R> {
    fn pick<'a>(&mut self, eligible: &[&'a str]) -> Option<&'a str> {
        eligible.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_eligible_takes_first() {
        let mut picker = FirstEligible;
        assert_eq!(picker.pick(&["a", "b"]), Some("a"));
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_random_picker_stays_within_eligible() {
        let mut picker = RandomPicker::seeded(7);
        let eligible = ["x", "y", "z"];
        for _ in 0..50 {
            let choice = picker.pick(&eligible).unwrap();
            assert!(eligible.contains(&choice));
        }
        assert_eq!(picker.pick(&[]), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let eligible = ["a", "b", "c", "d", "e"];
        let mut first = RandomPicker::seeded(42);
        let mut second = RandomPicker::seeded(42);

        let a: Vec<_> = (0..20).map(|_| first.pick(&eligible)).collect();
        let b: Vec<_> = (0..20).map(|_| second.pick(&eligible)).collect();
        assert_eq!(a, b);
    }
}
