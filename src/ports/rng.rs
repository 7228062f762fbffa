/// Randomness port for the scheduler
///
/// Pacing and speaker selection stay behind an injectable source so tests can
/// supply a deterministic sequence and assert exact transcript shape.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the scheduler's random draws
pub trait SchedulerRng: Send {
    /// Draw a simulated-minutes step from the inclusive range `[min, max]`
    fn step_minutes(&mut self, min: u32, max: u32) -> u32;

    /// Choose an index uniformly from `0..len`; `len` must be non-zero
    fn choose(&mut self, len: usize) -> usize;
}

/// Production source seeded from OS entropy
pub struct EntropyRng {
    rng: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulerRng for EntropyRng {
    fn step_minutes(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }

    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_rng_respects_bounds() {
        let mut rng = EntropyRng::new();
        for _ in 0..100 {
            let step = rng.step_minutes(7, 18);
            assert!((7..=18).contains(&step));
            assert!(rng.choose(8) < 8);
        }
    }

    #[test]
    fn test_degenerate_range_is_fixed() {
        let mut rng = EntropyRng::new();
        assert_eq!(rng.step_minutes(5, 5), 5);
        assert_eq!(rng.choose(1), 0);
    }
}
