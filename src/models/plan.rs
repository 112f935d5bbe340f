use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::food::{FoodItem, Season};
use crate::models::nutrients::{Nutrient, NutrientVector, RequirementMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One food and its portion within a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    pub food: FoodItem,
    pub grams: f64,
}

impl MealEntry {
    pub fn nutrients(&self) -> NutrientVector {
        self.food.nutrients.scale_grams(self.grams)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub name: String,
    pub entries: Vec<MealEntry>,
}

impl Meal {
    pub fn new(meal_type: MealType) -> Self {
        Self {
            meal_type,
            name: meal_type.label().to_string(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, food: FoodItem, grams: f64) {
        self.entries.push(MealEntry { food, grams });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_nutrients(&self) -> NutrientVector {
        self.entries.iter().map(MealEntry::nutrients).sum()
    }

    pub fn total_grams(&self) -> f64 {
        self.entries.iter().map(|e| e.grams).sum()
    }
}

/// A solved day: assembled meals plus the context they were solved for.
///
/// Aggregates are computed on demand from the meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDietPlan {
    pub season: Season,
    pub requirements: RequirementMap,
    pub meals: Vec<Meal>,
}

impl DailyDietPlan {
    pub fn new(season: Season, requirements: RequirementMap, meals: Vec<Meal>) -> Self {
        Self {
            season,
            requirements,
            meals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    fn entries(&self) -> impl Iterator<Item = &MealEntry> {
        self.meals.iter().flat_map(|m| m.entries.iter())
    }

    pub fn total_nutrients(&self) -> NutrientVector {
        self.meals.iter().map(Meal::total_nutrients).sum()
    }

    pub fn total_grams(&self) -> f64 {
        self.meals.iter().map(Meal::total_grams).sum()
    }

    /// Mean taste score over all entries (0.0 for an empty plan).
    pub fn average_taste(&self) -> f64 {
        mean(self.entries().map(|e| e.food.taste_score))
    }

    /// Mean digestion score over all entries (0.0 for an empty plan).
    pub fn average_digestion(&self) -> f64 {
        mean(self.entries().map(|e| e.food.digestion_score))
    }

    /// Fraction of each positive target met by the plan's nutrients.
    pub fn requirement_coverage(&self) -> BTreeMap<Nutrient, f64> {
        let totals = self.total_nutrients();
        self.requirements
            .iter()
            .filter(|(_, target)| **target > 0.0)
            .map(|(n, target)| (*n, totals.get(*n) / target))
            .collect()
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}
