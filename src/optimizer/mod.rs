pub mod assembly;
pub mod assignment;
pub mod constants;
pub mod scoring;
pub mod search;

use rand::Rng;
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::models::{DailyDietPlan, RequirementMap, Season};

pub use assembly::assemble_meals;
pub use assignment::{PortionAssignment, ScoredAssignment};
pub use constants::*;
pub use scoring::{
    ScoreBreakdown, assignment_nutrients, breakdown, concentration_penalty, nutrient_penalty,
    palatability_bonus, score,
};
pub use search::{LocalSearch, SearchConfig, SearchOutcome, optimize};

/// Solve a day's plan for `season` with the default search configuration.
pub fn solve<R: Rng>(
    catalog: &FoodCatalog,
    season: Season,
    requirements: &RequirementMap,
    rng: &mut R,
) -> DailyDietPlan {
    solve_with_config(catalog, season, requirements, &SearchConfig::default(), rng)
}

/// Filter the catalog by season, search for the best assignment, and assemble meals.
///
/// Always returns a plan; an empty season yields a plan with no meals.
pub fn solve_with_config<R: Rng>(
    catalog: &FoodCatalog,
    season: Season,
    requirements: &RequirementMap,
    config: &SearchConfig,
    rng: &mut R,
) -> DailyDietPlan {
    let foods = catalog.in_season(season);
    let outcome = LocalSearch::with_config(&foods, requirements, config.clone()).run(rng);
    let meals = assemble_meals(&foods, &outcome.best.assignment);

    let plan = DailyDietPlan::new(season, requirements.clone(), meals);
    info!(
        %season,
        candidates = foods.len(),
        meals = plan.meals.len(),
        best_score = outcome.best.score,
        "solved daily plan"
    );
    plan
}
