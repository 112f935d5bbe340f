use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DietError;

/// Nutrient identifiers, in the fixed order used for reporting and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
    Fiber,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    Thiamin,
    Riboflavin,
    Niacin,
    VitaminB6,
    Folate,
    VitaminB12,
    Calcium,
    Iron,
    Magnesium,
    Phosphorus,
    Potassium,
    Zinc,
    Copper,
    Manganese,
    Selenium,
}

/// How deviations from a target are penalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientKind {
    /// Both shortfall and surplus count.
    Macro,
    /// Only shortfall counts.
    Micro,
}

impl Nutrient {
    pub const ALL: [Nutrient; 25] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fats,
        Nutrient::Fiber,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::Thiamin,
        Nutrient::Riboflavin,
        Nutrient::Niacin,
        Nutrient::VitaminB6,
        Nutrient::Folate,
        Nutrient::VitaminB12,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Phosphorus,
        Nutrient::Potassium,
        Nutrient::Zinc,
        Nutrient::Copper,
        Nutrient::Manganese,
        Nutrient::Selenium,
    ];

    pub fn kind(self) -> NutrientKind {
        match self {
            Nutrient::Calories
            | Nutrient::Protein
            | Nutrient::Carbs
            | Nutrient::Fats
            | Nutrient::Fiber => NutrientKind::Macro,
            _ => NutrientKind::Micro,
        }
    }

    /// Canonical key, as used in requirement files.
    pub fn as_str(self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fats => "fats",
            Nutrient::Fiber => "fiber",
            Nutrient::VitaminA => "vitamin_a",
            Nutrient::VitaminC => "vitamin_c",
            Nutrient::VitaminD => "vitamin_d",
            Nutrient::VitaminE => "vitamin_e",
            Nutrient::VitaminK => "vitamin_k",
            Nutrient::Thiamin => "thiamin",
            Nutrient::Riboflavin => "riboflavin",
            Nutrient::Niacin => "niacin",
            Nutrient::VitaminB6 => "vitamin_b6",
            Nutrient::Folate => "folate",
            Nutrient::VitaminB12 => "vitamin_b12",
            Nutrient::Calcium => "calcium",
            Nutrient::Iron => "iron",
            Nutrient::Magnesium => "magnesium",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
            Nutrient::Zinc => "zinc",
            Nutrient::Copper => "copper",
            Nutrient::Manganese => "manganese",
            Nutrient::Selenium => "selenium",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Nutrient {
    type Err = DietError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Nutrient::ALL
            .into_iter()
            .find(|n| n.as_str() == key)
            .ok_or_else(|| DietError::UnknownNutrient(s.to_string()))
    }
}

/// Daily target per nutrient. Absent keys mean a target of zero.
pub type RequirementMap = BTreeMap<Nutrient, f64>;

/// Target for a nutrient, defaulting to 0.0 when the map has no entry.
#[inline]
pub fn target(requirements: &RequirementMap, nutrient: Nutrient) -> f64 {
    requirements.get(&nutrient).copied().unwrap_or(0.0)
}

/// Amounts of every tracked nutrient.
///
/// Catalog profiles are per 100 g; sums over an assignment are absolute amounts.
/// Operations return fresh vectors and never mutate their inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientVector {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub vitamin_e: f64,
    pub vitamin_k: f64,
    pub thiamin: f64,
    pub riboflavin: f64,
    pub niacin: f64,
    pub vitamin_b6: f64,
    pub folate: f64,
    pub vitamin_b12: f64,
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub zinc: f64,
    pub copper: f64,
    pub manganese: f64,
    pub selenium: f64,
}

impl NutrientVector {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a vector by evaluating `f` for every nutrient.
    pub fn from_fn(mut f: impl FnMut(Nutrient) -> f64) -> Self {
        let mut v = Self::zero();
        for n in Nutrient::ALL {
            *v.get_mut(n) = f(n);
        }
        v
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
            Nutrient::Fiber => self.fiber,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
            Nutrient::VitaminK => self.vitamin_k,
            Nutrient::Thiamin => self.thiamin,
            Nutrient::Riboflavin => self.riboflavin,
            Nutrient::Niacin => self.niacin,
            Nutrient::VitaminB6 => self.vitamin_b6,
            Nutrient::Folate => self.folate,
            Nutrient::VitaminB12 => self.vitamin_b12,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Phosphorus => self.phosphorus,
            Nutrient::Potassium => self.potassium,
            Nutrient::Zinc => self.zinc,
            Nutrient::Copper => self.copper,
            Nutrient::Manganese => self.manganese,
            Nutrient::Selenium => self.selenium,
        }
    }

    fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fats => &mut self.fats,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::VitaminE => &mut self.vitamin_e,
            Nutrient::VitaminK => &mut self.vitamin_k,
            Nutrient::Thiamin => &mut self.thiamin,
            Nutrient::Riboflavin => &mut self.riboflavin,
            Nutrient::Niacin => &mut self.niacin,
            Nutrient::VitaminB6 => &mut self.vitamin_b6,
            Nutrient::Folate => &mut self.folate,
            Nutrient::VitaminB12 => &mut self.vitamin_b12,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::Phosphorus => &mut self.phosphorus,
            Nutrient::Potassium => &mut self.potassium,
            Nutrient::Zinc => &mut self.zinc,
            Nutrient::Copper => &mut self.copper,
            Nutrient::Manganese => &mut self.manganese,
            Nutrient::Selenium => &mut self.selenium,
        }
    }

    /// Component-wise sum.
    pub fn add(&self, other: &NutrientVector) -> Self {
        Self::from_fn(|n| self.get(n) + other.get(n))
    }

    /// Scale a per-100 g profile to an amount in grams.
    pub fn scale_grams(&self, grams: f64) -> Self {
        let factor = grams / 100.0;
        Self::from_fn(|n| self.get(n) * factor)
    }

    /// All fields finite and non-negative.
    pub fn is_valid(&self) -> bool {
        Nutrient::ALL
            .into_iter()
            .all(|n| self.get(n).is_finite() && self.get(n) >= 0.0)
    }
}

impl std::ops::Add for NutrientVector {
    type Output = NutrientVector;

    fn add(self, other: NutrientVector) -> NutrientVector {
        NutrientVector::add(&self, &other)
    }
}

impl std::iter::Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), |acc, v| acc + v)
    }
}
