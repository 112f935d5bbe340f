use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::{FoodItem, RequirementMap};
use crate::optimizer::{LocalSearch, SearchConfig, assemble_meals};

/// Result of one seeded search run.
#[derive(Debug, Clone)]
pub struct SeedResult {
    pub seed: u64,
    pub best_score: f64,
    pub improvements: usize,
    /// Entries across all assembled meals.
    pub assembled_entries: usize,
    /// Grams kept by meal assembly.
    pub assembled_grams: f64,
}

/// Aggregated result of evaluating a configuration across seeds.
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub config: SearchConfig,
    pub mean_best_score: f64,
    pub min_best_score: f64,
    pub max_best_score: f64,
    pub mean_entries: f64,
    pub per_seed: Vec<SeedResult>,
}

impl EvaluationResult {
    /// Lexicographic comparison: (mean_best_score, max_best_score), lower is better.
    /// Returns `Greater` when `self` is the better result.
    pub fn cmp_score(&self, other: &Self) -> std::cmp::Ordering {
        match other.mean_best_score.partial_cmp(&self.mean_best_score) {
            Some(std::cmp::Ordering::Equal) | None => {}
            Some(ord) => return ord,
        }
        other
            .max_best_score
            .partial_cmp(&self.max_best_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    }

    /// Spread between worst and best seed.
    pub fn score_range(&self) -> f64 {
        self.max_best_score - self.min_best_score
    }
}

/// Run one seeded search and assemble its meals.
pub fn evaluate_seed(
    foods: &[FoodItem],
    requirements: &RequirementMap,
    config: &SearchConfig,
    seed: u64,
) -> SeedResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let outcome = LocalSearch::with_config(foods, requirements, config.clone()).run(&mut rng);
    let meals = assemble_meals(foods, &outcome.best.assignment);

    SeedResult {
        seed,
        best_score: outcome.best.score,
        improvements: outcome.improvements,
        assembled_entries: meals.iter().map(|m| m.entries.len()).sum(),
        assembled_grams: meals.iter().map(|m| m.total_grams()).sum(),
    }
}

/// Evaluate a configuration across several seeds.
pub fn evaluate_config(
    config: &SearchConfig,
    foods: &[FoodItem],
    requirements: &RequirementMap,
    seeds: &[u64],
) -> EvaluationResult {
    let per_seed: Vec<SeedResult> = seeds
        .iter()
        .map(|&seed| evaluate_seed(foods, requirements, config, seed))
        .collect();

    let n = per_seed.len().max(1) as f64;
    let mean_best_score = per_seed.iter().map(|r| r.best_score).sum::<f64>() / n;
    let mean_entries = per_seed.iter().map(|r| r.assembled_entries as f64).sum::<f64>() / n;
    let min_best_score = per_seed
        .iter()
        .map(|r| r.best_score)
        .fold(f64::INFINITY, f64::min);
    let max_best_score = per_seed
        .iter()
        .map(|r| r.best_score)
        .fold(f64::NEG_INFINITY, f64::max);

    EvaluationResult {
        config: config.clone(),
        mean_best_score,
        min_best_score,
        max_best_score,
        mean_entries,
        per_seed,
    }
}
