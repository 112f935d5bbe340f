use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::{FoodItem, RequirementMap};
use crate::optimizer::SearchConfig;
use crate::tuner::evaluation::{EvaluationResult, evaluate_config};
use crate::tuner::knobs::KnobRanges;

/// Configuration for the tuner.
pub struct TunerConfig {
    /// Number of random configurations to evaluate.
    pub iterations: usize,
    /// Seed for sampling configurations.
    pub seed: u64,
    /// Search seeds every configuration is evaluated on.
    pub eval_seeds: Vec<u64>,
    pub ranges: KnobRanges,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 123,
            eval_seeds: (1..=5).collect(),
            ranges: KnobRanges::default(),
        }
    }
}

/// Results from a tuning run.
pub struct TunerResults {
    /// All evaluation results, sorted best to worst.
    pub results: Vec<EvaluationResult>,
    /// The baseline result using default constants.
    pub baseline: EvaluationResult,
}

/// Run random-search tuning over search configurations.
pub fn run_tuner(
    config: &TunerConfig,
    foods: &[FoodItem],
    requirements: &RequirementMap,
) -> TunerResults {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.iterations);

    let baseline_config = SearchConfig::default();
    let baseline = evaluate_config(&baseline_config, foods, requirements, &config.eval_seeds);

    println!(
        "Baseline: mean={:.2} min={:.2} max={:.2} entries={:.1}",
        baseline.mean_best_score,
        baseline.min_best_score,
        baseline.max_best_score,
        baseline.mean_entries
    );
    println!("    {}\n", baseline_config.display());

    println!("Running {} iterations...", config.iterations);

    let mut best_mean = baseline.mean_best_score;

    for i in 0..config.iterations {
        let candidate = config.ranges.sample(&mut rng);
        let result = evaluate_config(&candidate, foods, requirements, &config.eval_seeds);

        if result.mean_best_score < best_mean {
            best_mean = result.mean_best_score;
            println!(
                "[{}/{}] New best: mean={:.2} min={:.2} max={:.2} ({})",
                i + 1,
                config.iterations,
                result.mean_best_score,
                result.min_best_score,
                result.max_best_score,
                candidate.display()
            );
        }

        results.push(result);

        if (i + 1) % (config.iterations / 10).max(1) == 0 {
            let pct = ((i + 1) as f64 / config.iterations as f64) * 100.0;
            eprint!("\r{:.0}% complete", pct);
        }
    }
    eprintln!();

    results.sort_by(|a, b| b.cmp_score(a));

    TunerResults { results, baseline }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, Nutrient, NutrientVector};

    #[test]
    fn test_run_tuner_sorts_best_first() {
        let foods = vec![
            FoodItem::new(
                "Rice",
                FoodCategory::Grain,
                NutrientVector {
                    calories: 130.0,
                    protein: 2.7,
                    ..Default::default()
                },
            ),
            FoodItem::new(
                "Tofu",
                FoodCategory::Protein,
                NutrientVector {
                    calories: 76.0,
                    protein: 8.0,
                    ..Default::default()
                },
            ),
        ];
        let mut req = RequirementMap::new();
        req.insert(Nutrient::Calories, 1800.0);
        req.insert(Nutrient::Protein, 50.0);

        let config = TunerConfig {
            iterations: 4,
            eval_seeds: vec![1, 2],
            ranges: KnobRanges {
                iterations: (20, 60),
                ..Default::default()
            },
            ..Default::default()
        };
        let results = run_tuner(&config, &foods, &req);

        assert_eq!(results.results.len(), 4);
        for w in results.results.windows(2) {
            assert!(w[0].mean_best_score <= w[1].mean_best_score);
        }
    }
}
