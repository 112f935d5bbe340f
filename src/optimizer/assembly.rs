use std::cmp::Ordering;

use crate::models::{FoodItem, Meal, MealType};
use crate::optimizer::assignment::PortionAssignment;
use crate::optimizer::constants::*;

/// Candidate portion: index into the food slice and its optimized grams.
#[derive(Debug, Clone, Copy)]
struct Portion {
    index: usize,
    grams: f64,
}

/// Non-noise portions sorted by descending grams; ties keep catalog order.
fn ranked_portions(foods: &[FoodItem], assignment: &PortionAssignment) -> Vec<Portion> {
    let mut portions: Vec<Portion> = assignment
        .iter()
        .filter(|(index, grams)| *index < foods.len() && *grams > NOISE_THRESHOLD_GRAMS)
        .map(|(index, grams)| Portion { index, grams })
        .collect();

    // Stable sort, so equal grams stay in catalog order.
    portions.sort_by(|a, b| b.grams.partial_cmp(&a.grams).unwrap_or(Ordering::Equal));
    portions
}

fn is_breakfast_food(food: &FoodItem) -> bool {
    food.digestion_score > BREAKFAST_MIN_DIGESTION && BREAKFAST_CATEGORIES.contains(&food.category)
}

/// Fill one meal from unused portions in ranked order.
///
/// Returns the meal and the indices it took.
fn fill_meal(
    meal_type: MealType,
    foods: &[FoodItem],
    ranked: &[Portion],
    used: &[bool],
    max_items: usize,
    portion: f64,
    eligible: impl Fn(&FoodItem) -> bool,
) -> (Meal, Vec<usize>) {
    let mut meal = Meal::new(meal_type);
    let mut taken = Vec::new();

    for p in ranked
        .iter()
        .filter(|p| !used[p.index] && eligible(&foods[p.index]))
        .take(max_items)
    {
        meal.push(foods[p.index].clone(), p.grams * portion);
        taken.push(p.index);
    }

    (meal, taken)
}

/// Turn an optimized assignment into breakfast, lunch and dinner.
///
/// Each meal takes a fixed fraction of a food's optimized grams; the rest is not
/// redistributed. Empty meals are left out.
pub fn assemble_meals(foods: &[FoodItem], assignment: &PortionAssignment) -> Vec<Meal> {
    let ranked = ranked_portions(foods, assignment);
    let mut used = vec![false; foods.len()];
    let mut meals = Vec::new();

    let (breakfast, taken) = fill_meal(
        MealType::Breakfast,
        foods,
        &ranked,
        &used,
        BREAKFAST_MAX_ITEMS,
        BREAKFAST_PORTION,
        is_breakfast_food,
    );
    for index in taken {
        used[index] = true;
    }
    meals.push(breakfast);

    let (lunch, taken) = fill_meal(
        MealType::Lunch,
        foods,
        &ranked,
        &used,
        LUNCH_MAX_ITEMS,
        LUNCH_PORTION,
        |_| true,
    );
    for index in taken {
        used[index] = true;
    }
    meals.push(lunch);

    // Dinner foods are not marked as used.
    let (dinner, _) = fill_meal(
        MealType::Dinner,
        foods,
        &ranked,
        &used,
        DINNER_MAX_ITEMS,
        DINNER_PORTION,
        |_| true,
    );
    meals.push(dinner);

    meals.retain(|m| !m.is_empty());
    meals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodCategory, NutrientVector};

    fn food(name: &str, category: FoodCategory, digestion: f64) -> FoodItem {
        FoodItem::new(name, category, NutrientVector::zero()).with_scores(6.0, digestion)
    }

    fn names(meal: &Meal) -> Vec<&str> {
        meal.entries.iter().map(|e| e.food.name.as_str()).collect()
    }

    #[test]
    fn test_single_fruit_goes_to_breakfast_only() {
        let foods = vec![food("Pear", FoodCategory::Fruit, 9.0).with_scores(8.0, 9.0)];
        let meals = assemble_meals(&foods, &PortionAssignment::from_grams(vec![300.0]));

        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].meal_type, MealType::Breakfast);
        assert_eq!(names(&meals[0]), vec!["Pear"]);
        assert!((meals[0].entries[0].grams - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_noise_is_dropped() {
        let foods = vec![
            food("Salt", FoodCategory::Spice, 5.0),
            food("Chard", FoodCategory::Vegetable, 5.0),
        ];
        let meals = assemble_meals(&foods, &PortionAssignment::from_grams(vec![10.0, 10.5]));
        assert_eq!(meals.len(), 1);
        assert_eq!(names(&meals[0]), vec!["Chard"]);
    }

    #[test]
    fn test_breakfast_requires_category_and_digestion() {
        let foods = vec![
            food("Yogurt", FoodCategory::Dairy, 7.0),
            food("Bread", FoodCategory::Grain, 7.5),
            food("Eggs", FoodCategory::Protein, 9.0),
        ];
        let meals = assemble_meals(
            &foods,
            &PortionAssignment::from_grams(vec![200.0, 100.0, 300.0]),
        );
        assert_eq!(meals[0].meal_type, MealType::Breakfast);
        assert_eq!(names(&meals[0]), vec!["Bread"]);
        assert_eq!(meals[1].meal_type, MealType::Lunch);
        assert_eq!(names(&meals[1]), vec!["Eggs", "Yogurt"]);
        assert!((meals[1].entries[0].grams - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_quotas_and_ordering() {
        let foods: Vec<FoodItem> = (0..20)
            .map(|i| food(&format!("F{i:02}"), FoodCategory::Vegetable, 5.0))
            .collect();
        let grams: Vec<f64> = (0..20).map(|i| 50.0 + i as f64 * 10.0).collect();
        let meals = assemble_meals(&foods, &PortionAssignment::from_grams(grams));

        assert_eq!(meals.len(), 2);
        assert_eq!(meals[0].meal_type, MealType::Lunch);
        assert_eq!(meals[0].entries.len(), LUNCH_MAX_ITEMS);
        assert_eq!(meals[0].entries[0].food.name, "F19");
        assert_eq!(meals[1].meal_type, MealType::Dinner);
        assert_eq!(meals[1].entries.len(), DINNER_MAX_ITEMS);
        assert_eq!(meals[1].entries[0].food.name, "F11");
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let foods = vec![
            food("B", FoodCategory::Vegetable, 5.0),
            food("A", FoodCategory::Vegetable, 5.0),
            food("C", FoodCategory::Vegetable, 5.0),
        ];
        let meals = assemble_meals(
            &foods,
            &PortionAssignment::from_grams(vec![100.0, 100.0, 200.0]),
        );
        assert_eq!(names(&meals[0]), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_empty_assignment_yields_no_meals() {
        assert!(assemble_meals(&[], &PortionAssignment::default()).is_empty());
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let foods = vec![
            food("Oats", FoodCategory::Grain, 8.0),
            food("Kale", FoodCategory::Vegetable, 6.0),
            food("Milk", FoodCategory::Dairy, 8.5),
        ];
        let a = PortionAssignment::from_grams(vec![120.0, 220.0, 120.0]);
        assert_eq!(assemble_meals(&foods, &a), assemble_meals(&foods, &a));
    }
}
