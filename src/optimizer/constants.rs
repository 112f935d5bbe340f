use crate::models::{FoodCategory, Nutrient};

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Penalty weight per unit of deviation from a nutrient's target.
pub const fn nutrient_weight(nutrient: Nutrient) -> f64 {
    match nutrient {
        Nutrient::Calories => 0.1,
        Nutrient::Protein => 10.0,
        Nutrient::Carbs => 2.0,
        Nutrient::Fats => 5.0,
        Nutrient::Fiber => 5.0,
        Nutrient::VitaminA | Nutrient::VitaminC | Nutrient::VitaminE | Nutrient::VitaminK => 2.0,
        Nutrient::VitaminD => 5.0,
        Nutrient::Thiamin | Nutrient::Riboflavin | Nutrient::VitaminB6 | Nutrient::VitaminB12 => {
            10.0
        }
        Nutrient::Niacin => 5.0,
        Nutrient::Folate => 2.0,
        Nutrient::Calcium => 0.5,
        Nutrient::Iron | Nutrient::Zinc => 10.0,
        Nutrient::Magnesium => 2.0,
        Nutrient::Phosphorus => 1.0,
        Nutrient::Potassium => 0.1,
        Nutrient::Copper => 20.0,
        Nutrient::Manganese => 10.0,
        Nutrient::Selenium => 5.0,
    }
}

/// Reward per point of mass-weighted average taste score.
pub const TASTE_WEIGHT: f64 = 2.0;

/// Reward per point of mass-weighted average digestion score.
pub const DIGESTION_WEIGHT: f64 = 2.0;

/// Floor for the total-mass denominator of the weighted averages.
pub const MIN_MASS_DENOMINATOR: f64 = 1.0;

/// Grams of a single food above which the concentration penalty applies.
pub const CONCENTRATION_LIMIT_GRAMS: f64 = 500.0;

/// Penalty per gram above the concentration limit.
pub const CONCENTRATION_PENALTY_PER_GRAM: f64 = 0.1;

// ─────────────────────────────────────────────────────────────────────────────
// Local search
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed iteration budget. There is no early stopping.
pub const SEARCH_ITERATIONS: usize = 1000;

/// Initial quantities are drawn uniformly from [0, INITIAL_MAX_GRAMS].
pub const INITIAL_MAX_GRAMS: f64 = 500.0;

/// Number of foods (in catalog order) perturbed each iteration.
pub const PERTURB_FOOD_COUNT: usize = 10;

/// Perturbation deltas are drawn uniformly from [-PERTURB_STEP_GRAMS, PERTURB_STEP_GRAMS].
pub const PERTURB_STEP_GRAMS: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal assembly
// ─────────────────────────────────────────────────────────────────────────────

/// Assignments at or below this many grams are dropped as noise.
pub const NOISE_THRESHOLD_GRAMS: f64 = 10.0;

pub const BREAKFAST_MAX_ITEMS: usize = 5;
pub const BREAKFAST_PORTION: f64 = 0.30;

/// Breakfast foods must digest strictly better than this.
pub const BREAKFAST_MIN_DIGESTION: f64 = 7.0;

pub const BREAKFAST_CATEGORIES: [FoodCategory; 3] =
    [FoodCategory::Fruit, FoodCategory::Grain, FoodCategory::Dairy];

pub const LUNCH_MAX_ITEMS: usize = 8;
pub const LUNCH_PORTION: f64 = 0.35;

pub const DINNER_MAX_ITEMS: usize = 8;
pub const DINNER_PORTION: f64 = 0.35;
