use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::nutrients::NutrientVector;

/// Quarter-of-year tag gating which foods are eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    #[serde(alias = "fall")]
    #[value(alias = "fall")]
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Food category. Unrecognised catalog values map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Vegetable,
    Protein,
    Grain,
    Herb,
    Spice,
    Fruit,
    Dairy,
    #[serde(other)]
    Other,
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Protein => "protein",
            FoodCategory::Grain => "grain",
            FoodCategory::Herb => "herb",
            FoodCategory::Spice => "spice",
            FoodCategory::Fruit => "fruit",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Other => "other",
        };
        f.write_str(s)
    }
}

/// A catalog food with its per-100 g nutrient profile and ratings.
///
/// Taste and digestion scores use a 0 to 10 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(default = "default_category")]
    pub category: FoodCategory,

    /// Nutrients per 100 g.
    #[serde(default)]
    pub nutrients: NutrientVector,

    #[serde(default)]
    pub taste_score: f64,

    #[serde(default)]
    pub digestion_score: f64,

    /// Seasons the food is available in. Empty means all year.
    #[serde(default)]
    pub seasons: Vec<Season>,
}

fn default_category() -> FoodCategory {
    FoodCategory::Other
}

impl FoodItem {
    pub fn new(name: impl Into<String>, category: FoodCategory, nutrients: NutrientVector) -> Self {
        Self {
            name: name.into(),
            category,
            nutrients,
            taste_score: 5.0,
            digestion_score: 5.0,
            seasons: Vec::new(),
        }
    }

    pub fn with_scores(mut self, taste: f64, digestion: f64) -> Self {
        self.taste_score = taste;
        self.digestion_score = digestion;
        self
    }

    pub fn with_seasons(mut self, seasons: &[Season]) -> Self {
        self.seasons = seasons.to_vec();
        self
    }

    pub fn is_available_in(&self, season: Season) -> bool {
        self.seasons.is_empty() || self.seasons.contains(&season)
    }

    /// Non-negative nutrients and ratings within 0..=10.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.nutrients.is_valid()
            && (0.0..=10.0).contains(&self.taste_score)
            && (0.0..=10.0).contains(&self.digestion_score)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
