use std::collections::{HashMap, HashSet};

use strsim::jaro_winkler;
use tracing::warn;

use crate::models::{FoodItem, Season};

/// Minimum similarity for a fuzzy name suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Maximum number of fuzzy suggestions returned.
const MAX_SUGGESTIONS: usize = 5;

/// Read-only, ordered view over the external food catalog.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog from raw records.
    ///
    /// Invalid records are dropped. Duplicate names (case-insensitive) keep the last
    /// record at the position of the first.
    pub fn new(records: Vec<FoodItem>) -> Self {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut foods: Vec<FoodItem> = Vec::with_capacity(records.len());

        for food in records {
            if !food.is_valid() {
                warn!(food = %food.name, "dropping invalid catalog record");
                continue;
            }
            match positions.get(&food.key()) {
                Some(&pos) => foods[pos] = food,
                None => {
                    positions.insert(food.key(), foods.len());
                    foods.push(food);
                }
            }
        }

        Self { foods }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&FoodItem> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Foods available in `season`, in catalog order.
    pub fn in_season(&self, season: Season) -> Vec<FoodItem> {
        self.foods
            .iter()
            .filter(|f| f.is_available_in(season))
            .cloned()
            .collect()
    }

    /// A copy of the catalog without the named foods (case-insensitive).
    pub fn without(&self, names: &[String]) -> FoodCatalog {
        let excluded: HashSet<String> = names.iter().map(|n| n.to_lowercase()).collect();
        FoodCatalog {
            foods: self
                .foods
                .iter()
                .filter(|f| !excluded.contains(&f.key()))
                .cloned()
                .collect(),
        }
    }

    /// Names similar to `input`, best match first.
    pub fn suggest(&self, input: &str) -> Vec<&str> {
        let needle = input.trim().to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &needle)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(f, _)| f.name.as_str())
            .collect()
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
