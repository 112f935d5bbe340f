use crate::models::nutrients::target;
use crate::models::{FoodItem, Nutrient, NutrientKind, NutrientVector, RequirementMap};
use crate::optimizer::assignment::PortionAssignment;
use crate::optimizer::constants::*;

/// Individual score terms. `total = nutrient_penalty - palatability_bonus + concentration_penalty`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub nutrient_penalty: f64,
    pub palatability_bonus: f64,
    pub concentration_penalty: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.nutrient_penalty - self.palatability_bonus + self.concentration_penalty
    }
}

/// Sum of every food's per-100 g profile scaled by its assigned grams.
pub fn assignment_nutrients(foods: &[FoodItem], assignment: &PortionAssignment) -> NutrientVector {
    foods
        .iter()
        .zip(assignment.as_slice())
        .map(|(food, grams)| food.nutrients.scale_grams(*grams))
        .sum()
}

/// Weighted deviation from the requirement targets.
///
/// Macros pay for deviation in both directions; vitamins and minerals only for shortfall.
pub fn nutrient_penalty(nutrients: &NutrientVector, requirements: &RequirementMap) -> f64 {
    Nutrient::ALL
        .into_iter()
        .map(|n| {
            let actual = nutrients.get(n);
            let goal = target(requirements, n);
            let deviation = match n.kind() {
                NutrientKind::Macro => (actual - goal).abs(),
                NutrientKind::Micro => (goal - actual).max(0.0),
            };
            deviation * nutrient_weight(n)
        })
        .sum()
}

/// Reward for mass-weighted taste and digestion scores.
pub fn palatability_bonus(foods: &[FoodItem], assignment: &PortionAssignment) -> f64 {
    let total_grams = assignment.total_grams().max(MIN_MASS_DENOMINATOR);

    let (taste, digestion) = foods
        .iter()
        .zip(assignment.as_slice())
        .fold((0.0, 0.0), |(t, d), (food, grams)| {
            (t + food.taste_score * grams, d + food.digestion_score * grams)
        });

    TASTE_WEIGHT * (taste / total_grams) + DIGESTION_WEIGHT * (digestion / total_grams)
}

/// Penalty for any single food above the concentration limit.
pub fn concentration_penalty(assignment: &PortionAssignment) -> f64 {
    assignment
        .iter()
        .filter(|(_, grams)| *grams > CONCENTRATION_LIMIT_GRAMS)
        .map(|(_, grams)| (grams - CONCENTRATION_LIMIT_GRAMS) * CONCENTRATION_PENALTY_PER_GRAM)
        .sum()
}

pub fn breakdown(
    nutrients: &NutrientVector,
    requirements: &RequirementMap,
    foods: &[FoodItem],
    assignment: &PortionAssignment,
) -> ScoreBreakdown {
    ScoreBreakdown {
        nutrient_penalty: nutrient_penalty(nutrients, requirements),
        palatability_bonus: palatability_bonus(foods, assignment),
        concentration_penalty: concentration_penalty(assignment),
    }
}

/// Scalar score of a candidate assignment. Lower is better and may be negative.
///
/// `nutrients` must be the nutrient content of `assignment` over `foods`.
pub fn score(
    nutrients: &NutrientVector,
    requirements: &RequirementMap,
    foods: &[FoodItem],
    assignment: &PortionAssignment,
) -> f64 {
    breakdown(nutrients, requirements, foods, assignment).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodCategory;

    fn spinach() -> FoodItem {
        FoodItem::new(
            "Spinach",
            FoodCategory::Vegetable,
            NutrientVector {
                calories: 23.0,
                protein: 2.9,
                iron: 2.7,
                vitamin_c: 28.0,
                ..Default::default()
            },
        )
        .with_scores(4.0, 6.0)
    }

    fn requirements() -> RequirementMap {
        let mut req = RequirementMap::new();
        req.insert(Nutrient::Calories, 2000.0);
        req.insert(Nutrient::Protein, 50.0);
        req.insert(Nutrient::Iron, 18.0);
        req.insert(Nutrient::VitaminC, 90.0);
        req
    }

    #[test]
    fn test_concentration_penalty_threshold() {
        assert_eq!(concentration_penalty(&PortionAssignment::from_grams(vec![500.0])), 0.0);
        let over = concentration_penalty(&PortionAssignment::from_grams(vec![600.0]));
        assert!((over - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_micro_surplus_is_free() {
        let mut req = RequirementMap::new();
        req.insert(Nutrient::VitaminC, 10.0);
        let rich = NutrientVector {
            vitamin_c: 500.0,
            ..Default::default()
        };
        assert_eq!(nutrient_penalty(&rich, &req), 0.0);
    }

    #[test]
    fn test_macro_surplus_is_penalized() {
        let mut req = RequirementMap::new();
        req.insert(Nutrient::Protein, 50.0);
        let excess = NutrientVector {
            protein: 60.0,
            ..Default::default()
        };
        assert!((nutrient_penalty(&excess, &req) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_assignment_is_pure_deficiency() {
        let req = requirements();
        let empty = PortionAssignment::default();
        let nutrients = assignment_nutrients(&[], &empty);
        let s = score(&nutrients, &req, &[], &empty);
        // 2000*0.1 + 50*10 + 18*10 + 90*2
        assert!((s - 1060.0).abs() < 1e-9);
    }

    #[test]
    fn test_palatability_is_mass_weighted() {
        let tasty = FoodItem::new("Berry", FoodCategory::Fruit, NutrientVector::zero())
            .with_scores(10.0, 10.0);
        let bland = FoodItem::new("Tofu", FoodCategory::Protein, NutrientVector::zero())
            .with_scores(0.0, 0.0);
        let foods = vec![tasty, bland];
        let a = PortionAssignment::from_grams(vec![300.0, 100.0]);
        // 2 * 7.5 + 2 * 7.5
        assert!((palatability_bonus(&foods, &a) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_palatability_guards_tiny_mass() {
        let foods = vec![spinach()];
        let a = PortionAssignment::from_grams(vec![0.5]);
        // Denominator floors at 1 g: 2 * 4 * 0.5 + 2 * 6 * 0.5
        assert!((palatability_bonus(&foods, &a) - 10.0).abs() < 1e-9);
        assert_eq!(palatability_bonus(&foods, &PortionAssignment::zeros(1)), 0.0);
    }

    #[test]
    fn test_score_monotone_in_shortfall() {
        let foods = vec![spinach()];
        let a = PortionAssignment::from_grams(vec![200.0]);
        let nutrients = assignment_nutrients(&foods, &a);

        let mut prev = f64::NEG_INFINITY;
        for iron_target in [0.0, 5.0, 10.0, 18.0, 40.0] {
            let mut req = requirements();
            req.insert(Nutrient::Iron, iron_target);
            let s = score(&nutrients, &req, &foods, &a);
            assert!(s >= prev, "score dropped from {prev} to {s}");
            prev = s;
        }
    }

    #[test]
    fn test_breakdown_total_matches_score() {
        let foods = vec![spinach()];
        let a = PortionAssignment::from_grams(vec![650.0]);
        let nutrients = assignment_nutrients(&foods, &a);
        let req = requirements();
        let parts = breakdown(&nutrients, &req, &foods, &a);
        assert!((parts.concentration_penalty - 15.0).abs() < 1e-9);
        assert_eq!(parts.total(), score(&nutrients, &req, &foods, &a));
    }
}
