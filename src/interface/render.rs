use crate::models::{DailyDietPlan, FoodItem, Nutrient};

/// Number of weakest requirement coverages shown in the summary.
const COVERAGE_ROWS: usize = 5;

/// Display a solved plan, meal by meal.
pub fn display_plan(plan: &DailyDietPlan) {
    if plan.is_empty() {
        println!("No plan generated (no foods in season or nothing worth eating).");
        return;
    }

    println!();
    println!("=== Daily Plan ({}) ===", plan.season);

    let max_name_len = plan
        .meals
        .iter()
        .flat_map(|m| m.entries.iter())
        .map(|e| e.food.name.len())
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        println!();
        println!("--- {} ---", meal.name);
        for (i, entry) in meal.entries.iter().enumerate() {
            println!(
                "{:>3}. {:<width$} {:>7.1} g | {:>6.0} kcal | taste {:.1} digestion {:.1}",
                i + 1,
                entry.food.name,
                entry.grams,
                entry.nutrients().calories,
                entry.food.taste_score,
                entry.food.digestion_score,
                width = max_name_len
            );
        }
    }

    let totals = plan.total_nutrients();

    println!();
    println!("--- Summary ---");
    println!("Total grams: {:.0}", plan.total_grams());
    println!("Calories: {:.0}", totals.calories);
    println!(
        "Protein: {:.1} g  Carbs: {:.1} g  Fats: {:.1} g  Fiber: {:.1} g",
        totals.protein, totals.carbs, totals.fats, totals.fiber
    );
    println!("Average taste: {:.2}", plan.average_taste());
    println!("Average digestion: {:.2}", plan.average_digestion());

    let mut coverage: Vec<(Nutrient, f64)> = plan.requirement_coverage().into_iter().collect();
    coverage.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    if !coverage.is_empty() {
        println!("Lowest requirement coverage:");
        for (nutrient, ratio) in coverage.iter().take(COVERAGE_ROWS) {
            println!("  {:<12} {:>6.1}%", nutrient, ratio * 100.0);
        }
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let seasons = if food.seasons.is_empty() {
            "all year".to_string()
        } else {
            food.seasons
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "  {} [{}] - {} kcal/100g, P:{} C:{} F:{}, taste:{} digestion:{} ({})",
            food.name,
            food.category,
            food.nutrients.calories,
            food.nutrients.protein,
            food.nutrients.carbs,
            food.nutrients.fats,
            food.taste_score,
            food.digestion_score,
            seasons
        );
    }

    println!();
}
