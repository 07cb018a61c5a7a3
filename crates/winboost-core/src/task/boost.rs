//! Boost-level default sampler.
//!
//! New tasks get an energy cost (and, when the user leaves it blank, a time
//! estimate) drawn uniformly from the range of their boost level. Randomness
//! is injected so the store stays deterministic and tests can pin the draw.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;

use super::BoostLevel;

/// Draws boost-level defaults from an injected RNG.
#[derive(Debug, Clone)]
pub struct BoostSampler<R = Mcg128Xsl64> {
    rng: R,
}

impl BoostSampler<Mcg128Xsl64> {
    /// Seeded sampler for reproducible sessions, or entropy-seeded when `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> BoostSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Energy cost in `level.energy_range()`.
    pub fn energy(&mut self, level: BoostLevel) -> u8 {
        self.rng.gen_range(level.energy_range())
    }

    /// Time estimate in minutes in `level.time_range()`.
    pub fn time_estimate(&mut self, level: BoostLevel) -> u32 {
        self.rng.gen_range(level.time_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn samples_stay_within_tier_ranges() {
        let mut sampler = BoostSampler::seeded(Some(7));
        for level in BoostLevel::ALL {
            for _ in 0..500 {
                assert!(level.energy_range().contains(&sampler.energy(level)));
                assert!(level.time_range().contains(&sampler.time_estimate(level)));
            }
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = BoostSampler::seeded(Some(42));
        let mut b = BoostSampler::seeded(Some(42));
        let xs: Vec<u8> = (0..20).map(|_| a.energy(BoostLevel::Hard)).collect();
        let ys: Vec<u8> = (0..20).map(|_| b.energy(BoostLevel::Hard)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn zero_rng_yields_range_floor() {
        let mut sampler = BoostSampler::new(StepRng::new(0, 0));
        assert_eq!(sampler.energy(BoostLevel::Easy), 1);
        assert_eq!(sampler.energy(BoostLevel::Medium), 4);
        assert_eq!(sampler.energy(BoostLevel::Hard), 7);
        assert_eq!(sampler.time_estimate(BoostLevel::Hard), 30);
    }

    #[test]
    fn hard_tier_reaches_both_ends() {
        let mut sampler = BoostSampler::seeded(Some(1));
        let draws: Vec<u8> = (0..2000).map(|_| sampler.energy(BoostLevel::Hard)).collect();
        assert!(draws.contains(&7));
        assert!(draws.contains(&10));
    }
}
