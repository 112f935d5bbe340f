pub mod food;
pub mod nutrients;
pub mod plan;

pub use food::{FoodCategory, FoodItem, Season};
pub use nutrients::{Nutrient, NutrientKind, NutrientVector, RequirementMap};
pub use plan::{DailyDietPlan, Meal, MealEntry, MealType};
