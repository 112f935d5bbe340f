use rand::Rng;

use crate::optimizer::SearchConfig;

/// Min/max ranges for each tunable search parameter.
#[derive(Debug, Clone)]
pub struct KnobRanges {
    /// (min, max) for the iteration budget
    pub iterations: (usize, usize),
    /// (min, max) for the initial draw ceiling in grams
    pub initial_max_grams: (f64, f64),
    /// (min, max) for the number of perturbed foods
    pub perturb_count: (usize, usize),
    /// (min, max) for the perturbation step in grams
    pub perturb_step: (f64, f64),
}

impl Default for KnobRanges {
    fn default() -> Self {
        Self {
            iterations: (250, 2000),
            initial_max_grams: (100.0, 600.0),
            perturb_count: (1, 30),
            perturb_step: (5.0, 120.0),
        }
    }
}

impl KnobRanges {
    /// Draw a random configuration within the ranges.
    pub fn sample(&self, rng: &mut impl Rng) -> SearchConfig {
        SearchConfig {
            iterations: rng.gen_range(self.iterations.0..=self.iterations.1),
            initial_max_grams: rng
                .gen_range(self.initial_max_grams.0..=self.initial_max_grams.1),
            perturb_count: rng.gen_range(self.perturb_count.0..=self.perturb_count.1),
            perturb_step: rng.gen_range(self.perturb_step.0..=self.perturb_step.1),
        }
    }

    pub fn contains(&self, config: &SearchConfig) -> bool {
        (self.iterations.0..=self.iterations.1).contains(&config.iterations)
            && (self.initial_max_grams.0..=self.initial_max_grams.1)
                .contains(&config.initial_max_grams)
            && (self.perturb_count.0..=self.perturb_count.1).contains(&config.perturb_count)
            && (self.perturb_step.0..=self.perturb_step.1).contains(&config.perturb_step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_default_config_within_default_ranges() {
        assert!(KnobRanges::default().contains(&SearchConfig::default()));
    }

    #[test]
    fn test_sample_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let ranges = KnobRanges::default();
        for _ in 0..50 {
            let config = ranges.sample(&mut rng);
            assert!(ranges.contains(&config), "{}", config.display());
        }
    }

    #[test]
    fn test_degenerate_range_is_fixed() {
        let mut rng = StdRng::seed_from_u64(1);
        let ranges = KnobRanges {
            iterations: (10, 10),
            initial_max_grams: (50.0, 50.0),
            perturb_count: (2, 2),
            perturb_step: (0.0, 0.0),
        };
        let config = ranges.sample(&mut rng);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.initial_max_grams, 50.0);
        assert_eq!(config.perturb_step, 0.0);
    }
}
