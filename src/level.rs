// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Randomized tower heights.

use rand::Rng;
use rand_core::RngCore;

use crate::config::Config;

/// Picks the height of each new node by repeated biased coin flips.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Leveler {
    config: Config,
}

impl Leveler {
    pub(crate) fn new(config: Config) -> Leveler {
        return Leveler { config };
    }

    pub(crate) fn config(&self) -> Config {
        return self.config;
    }

    /// Height for a new node, in `1..=min(max_height, current + 1)`.
    ///
    /// Each extra level is granted with the configured probability, so heights
    /// follow a geometric distribution truncated at the cap. Limiting growth
    /// to one level above the current tower keeps the grow step of an insert
    /// to a single level.
    pub(crate) fn random_level<R: RngCore>(&self, rng: &mut R, current: usize) -> usize {
        let mut height = 1;
        while rng.r#gen::<f64>() < self.config.probability()
            && height < self.config.max_height()
            && height < current + 1
        {
            height += 1;
        }
        return height;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    /// RNG that returns the same word forever.
    ///
    /// `u64::MIN` makes every draw 0.0 (always promote), `u64::MAX` makes
    /// every draw just below 1.0 (never promote).
    pub(crate) struct Fixed(pub u64);

    impl RngCore for Fixed {
        fn next_u32(&mut self) -> u32 {
            return self.0 as u32;
        }

        fn next_u64(&mut self) -> u64 {
            return self.0;
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(self.0 as u8);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            return Ok(());
        }
    }

    fn policy(probability: f64, max_height: usize) -> Leveler {
        return Leveler::new(Config::new(probability, max_height).unwrap());
    }

    #[test]
    fn never_promote_gives_height_one() {
        let leveler = policy(0.5, 32);
        let mut rng = Fixed(u64::MAX);
        for current in 1..=32 {
            assert_eq!(leveler.random_level(&mut rng, current), 1);
        }
    }

    #[test]
    fn always_promote_is_truncated_at_current_plus_one() {
        let leveler = policy(0.5, 32);
        let mut rng = Fixed(0);
        assert_eq!(leveler.random_level(&mut rng, 1), 2);
        assert_eq!(leveler.random_level(&mut rng, 5), 6);
    }

    #[test]
    fn always_promote_is_truncated_at_cap() {
        let leveler = policy(0.5, 4);
        let mut rng = Fixed(0);
        assert_eq!(leveler.random_level(&mut rng, 4), 4);
        assert_eq!(leveler.random_level(&mut rng, 40), 4);

        let flat = policy(0.9, 1);
        assert_eq!(flat.random_level(&mut rng, 1), 1);
    }

    #[test]
    fn heights_stay_in_bounds() {
        let leveler = policy(0.75, 8);
        let mut rng = SmallRng::seed_from_u64(7);
        for current in 1..=8 {
            for _ in 0..1000 {
                let height = leveler.random_level(&mut rng, current);
                assert!(height >= 1);
                assert!(height <= 8);
                assert!(height <= current + 1);
            }
        }
    }

    #[test]
    fn distribution_is_roughly_geometric() {
        let leveler = policy(0.5, 32);
        let mut rng = SmallRng::seed_from_u64(42);
        let trials = 20_000;
        let mut counts = [0usize; 33];
        for _ in 0..trials {
            counts[leveler.random_level(&mut rng, 32)] += 1;
        }

        // P(1) = 0.5, P(2) = 0.25, P(3) = 0.125
        let share = |h: usize| counts[h] as f64 / trials as f64;
        assert!((share(1) - 0.5).abs() < 0.03, "P(1) = {}", share(1));
        assert!((share(2) - 0.25).abs() < 0.03, "P(2) = {}", share(2));
        assert!((share(3) - 0.125).abs() < 0.03, "P(3) = {}", share(3));
    }

    #[test]
    fn same_seed_same_heights() {
        let leveler = policy(0.5, 16);
        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        for current in 1..200 {
            let current = current % 16 + 1;
            assert_eq!(
                leveler.random_level(&mut a, current),
                leveler.random_level(&mut b, current)
            );
        }
    }
}
